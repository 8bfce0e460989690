//! Shopping cart and favorites management
//!
//! Duplicates are checked before inserting so a second add is reported as a
//! conflict. A unique-constraint violation from a concurrent add is reported
//! the same way.

use sea_orm::{DbErr, SqlErr};
use tracing::info;

use foodgram_common::{FoodgramError, RecipeCollection};
use foodgram_persistence::{PersistenceService, RecipeSummary};

use crate::metrics;

pub const OBJECT_DOES_NOT_EXIST: &str = "object does not exist";

async fn find_recipe(
    persistence: &dyn PersistenceService,
    recipe_id: i32,
) -> Result<RecipeSummary, FoodgramError> {
    persistence
        .recipe_find_summary(recipe_id)
        .await
        .map_err(FoodgramError::database)?
        .ok_or_else(|| FoodgramError::ResourceNotFound(format!("recipe {}", recipe_id)))
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DbErr>().and_then(DbErr::sql_err),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}

/// Put a recipe into one of the user's collections.
pub async fn add_recipe(
    persistence: &dyn PersistenceService,
    collection: RecipeCollection,
    user_id: i32,
    recipe_id: i32,
) -> Result<RecipeSummary, FoodgramError> {
    let recipe = find_recipe(persistence, recipe_id).await?;

    let exists = persistence
        .collection_contains(collection, user_id, recipe_id)
        .await
        .map_err(FoodgramError::database)?;
    if exists {
        return Err(FoodgramError::ResourceConflict(
            collection.duplicate_message().to_string(),
        ));
    }

    persistence
        .collection_add(collection, user_id, recipe_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                FoodgramError::ResourceConflict(collection.duplicate_message().to_string())
            } else {
                FoodgramError::database(e)
            }
        })?;

    metrics::record_collection_change(collection.as_str(), "add");
    info!(user_id, recipe_id, %collection, "Recipe added");

    Ok(recipe)
}

/// Take a recipe out of one of the user's collections.
pub async fn remove_recipe(
    persistence: &dyn PersistenceService,
    collection: RecipeCollection,
    user_id: i32,
    recipe_id: i32,
) -> Result<(), FoodgramError> {
    find_recipe(persistence, recipe_id).await?;

    let removed = persistence
        .collection_remove(collection, user_id, recipe_id)
        .await
        .map_err(FoodgramError::database)?;
    if removed == 0 {
        return Err(FoodgramError::IllegalArgument(
            OBJECT_DOES_NOT_EXIST.to_string(),
        ));
    }

    metrics::record_collection_change(collection.as_str(), "remove");
    info!(user_id, recipe_id, %collection, "Recipe removed");

    Ok(())
}
