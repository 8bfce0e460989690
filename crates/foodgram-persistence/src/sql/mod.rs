//! SQL-based persistence backend (MySQL/PostgreSQL via SeaORM)
//!
//! Implements every persistence trait with direct SeaORM queries against a
//! shared `DatabaseConnection` pool.

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Alias, Expr, Func, LikeExpr, Query, SimpleExpr},
    *,
};
use tracing::debug;

use foodgram_common::RecipeCollection;

use crate::entity::{cart, favorite, ingredient, recipe, recipe_ingredient, tag, users};
use crate::model::*;
use crate::traits::*;

/// External database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` and implements all persistence traits
/// by delegating to direct database queries.
pub struct ExternalDbPersistService {
    db: DatabaseConnection,
}

impl ExternalDbPersistService {
    /// Create a new ExternalDbPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for ExternalDbPersistService {
    async fn health_check(&self) -> anyhow::Result<()> {
        // Execute a simple query to verify connectivity
        users::Entity::find()
            .select_only()
            .column_as(Expr::cust("1"), "health")
            .into_tuple::<i32>()
            .one(&self.db)
            .await?;
        Ok(())
    }
}

// ============================================================================
// IngredientLedger implementation
// ============================================================================

/// `SUM(amount)` cast to a 64-bit integer.
///
/// MySQL returns `DECIMAL` for integer sums and spells the 64-bit cast target
/// `SIGNED`; PostgreSQL and SQLite accept `BIGINT`.
fn amount_sum_expr(backend: DbBackend) -> SimpleExpr {
    let target = match backend {
        DbBackend::MySql => "SIGNED",
        _ => "BIGINT",
    };

    Func::cast_as(
        Func::sum(Expr::col((
            recipe_ingredient::Entity,
            recipe_ingredient::Column::Amount,
        ))),
        Alias::new(target),
    )
    .into()
}

#[async_trait]
impl IngredientLedger for ExternalDbPersistService {
    async fn sum_ingredients_for_cart(&self, user_id: i32) -> anyhow::Result<Vec<ShoppingListRow>> {
        let cart_recipes = Query::select()
            .column(cart::Column::RecipeId)
            .from(cart::Entity)
            .and_where(cart::Column::UserId.eq(user_id))
            .to_owned();

        let rows = recipe_ingredient::Entity::find()
            .select_only()
            .column_as(ingredient::Column::Name, "ingredient_name")
            .column_as(
                amount_sum_expr(self.db.get_database_backend()),
                "total_amount",
            )
            .column_as(ingredient::Column::MeasurementUnit, "measurement_unit")
            .join(
                JoinType::InnerJoin,
                recipe_ingredient::Relation::Ingredient.def(),
            )
            .filter(recipe_ingredient::Column::RecipeId.in_subquery(cart_recipes))
            .group_by(ingredient::Column::Id)
            .group_by(ingredient::Column::Name)
            .group_by(ingredient::Column::MeasurementUnit)
            .order_by_asc(ingredient::Column::Name)
            .order_by_asc(ingredient::Column::Id)
            .into_model::<ShoppingListRow>()
            .all(&self.db)
            .await?;

        debug!(user_id, rows = rows.len(), "Aggregated shopping cart ingredients");

        Ok(rows)
    }
}

// ============================================================================
// CollectionPersistence implementation
// ============================================================================

#[async_trait]
impl CollectionPersistence for ExternalDbPersistService {
    async fn collection_contains(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<bool> {
        let count = match collection {
            RecipeCollection::ShoppingCart => {
                cart::Entity::find()
                    .filter(cart::Column::UserId.eq(user_id))
                    .filter(cart::Column::RecipeId.eq(recipe_id))
                    .count(&self.db)
                    .await?
            }
            RecipeCollection::Favorite => {
                favorite::Entity::find()
                    .filter(favorite::Column::UserId.eq(user_id))
                    .filter(favorite::Column::RecipeId.eq(recipe_id))
                    .count(&self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    async fn collection_add(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<()> {
        match collection {
            RecipeCollection::ShoppingCart => {
                cart::ActiveModel {
                    user_id: Set(user_id),
                    recipe_id: Set(recipe_id),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;
            }
            RecipeCollection::Favorite => {
                favorite::ActiveModel {
                    user_id: Set(user_id),
                    recipe_id: Set(recipe_id),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;
            }
        }

        Ok(())
    }

    async fn collection_remove(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<u64> {
        let result = match collection {
            RecipeCollection::ShoppingCart => {
                cart::Entity::delete_many()
                    .filter(cart::Column::UserId.eq(user_id))
                    .filter(cart::Column::RecipeId.eq(recipe_id))
                    .exec(&self.db)
                    .await?
            }
            RecipeCollection::Favorite => {
                favorite::Entity::delete_many()
                    .filter(favorite::Column::UserId.eq(user_id))
                    .filter(favorite::Column::RecipeId.eq(recipe_id))
                    .exec(&self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}

// ============================================================================
// RecipePersistence implementation
// ============================================================================

#[async_trait]
impl RecipePersistence for ExternalDbPersistService {
    async fn recipe_find_summary(&self, recipe_id: i32) -> anyhow::Result<Option<RecipeSummary>> {
        let recipe = recipe::Entity::find_by_id(recipe_id).one(&self.db).await?;

        Ok(recipe.map(RecipeSummary::from))
    }

    async fn recipe_set_ingredients(
        &self,
        recipe_id: i32,
        items: &[IngredientAmount],
    ) -> anyhow::Result<()> {
        validate_recipe_ingredients(items)?;

        let txn = self.db.begin().await?;

        recipe_ingredient::Entity::delete_many()
            .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await?;

        let models = items.iter().map(|item| recipe_ingredient::ActiveModel {
            recipe_id: Set(recipe_id),
            ingredient_id: Set(item.ingredient_id),
            amount: Set(item.amount),
            ..Default::default()
        });
        recipe_ingredient::Entity::insert_many(models)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

// ============================================================================
// IngredientPersistence implementation
// ============================================================================

/// Escape SQL wildcard characters so user input matches literally in LIKE.
#[inline]
fn escape_sql_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl IngredientPersistence for ExternalDbPersistService {
    async fn ingredient_find_all(
        &self,
        name_prefix: Option<&str>,
    ) -> anyhow::Result<Vec<IngredientInfo>> {
        let backend = self.db.get_database_backend();
        let prefix = name_prefix
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase);

        let mut query = ingredient::Entity::find();

        // SQLite's LOWER() only folds ASCII, so the prefix is matched below instead
        if let Some(prefix) = &prefix
            && backend != DbBackend::Sqlite
        {
            let pattern = format!("{}%", escape_sql_like_pattern(prefix));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(ingredient::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let mut ingredients: Vec<IngredientInfo> = query
            .order_by_asc(ingredient::Column::Name)
            .order_by_asc(ingredient::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(IngredientInfo::from)
            .collect();

        if let Some(prefix) = &prefix
            && backend == DbBackend::Sqlite
        {
            ingredients.retain(|i| i.name.to_lowercase().starts_with(prefix.as_str()));
        }

        Ok(ingredients)
    }

    async fn ingredient_find_by_id(&self, id: i32) -> anyhow::Result<Option<IngredientInfo>> {
        let ingredient = ingredient::Entity::find_by_id(id).one(&self.db).await?;

        Ok(ingredient.map(IngredientInfo::from))
    }
}

// ============================================================================
// TagPersistence implementation
// ============================================================================

#[async_trait]
impl TagPersistence for ExternalDbPersistService {
    async fn tag_find_all(&self) -> anyhow::Result<Vec<TagInfo>> {
        let tags = tag::Entity::find()
            .order_by_asc(tag::Column::Name)
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(TagInfo::from)
            .collect();

        Ok(tags)
    }

    async fn tag_find_by_id(&self, id: i32) -> anyhow::Result<Option<TagInfo>> {
        let tag = tag::Entity::find_by_id(id).one(&self.db).await?;

        Ok(tag.map(TagInfo::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sql_like_pattern() {
        assert_eq!(escape_sql_like_pattern("sugar"), "sugar");
        assert_eq!(escape_sql_like_pattern("100%"), "100\\%");
        assert_eq!(escape_sql_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_sql_like_pattern("c:\\"), "c:\\\\");
    }

    #[test]
    fn test_amount_sum_expr_cast_target() {
        let select = |backend: DbBackend| {
            recipe_ingredient::Entity::find()
                .select_only()
                .column_as(amount_sum_expr(backend), "total_amount")
                .build(backend)
                .to_string()
        };

        assert!(select(DbBackend::Postgres).contains("AS BIGINT)"));
        assert!(select(DbBackend::MySql).contains("AS SIGNED)"));
        assert!(select(DbBackend::Sqlite).contains("SUM("));
    }
}
