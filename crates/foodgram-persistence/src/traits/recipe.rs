//! Recipe persistence trait

use async_trait::async_trait;

use crate::model::{IngredientAmount, RecipeSummary};

#[async_trait]
pub trait RecipePersistence: Send + Sync {
    /// Find a recipe's short representation by ID
    async fn recipe_find_summary(&self, recipe_id: i32) -> anyhow::Result<Option<RecipeSummary>>;

    /// Replace the ingredient list of a recipe.
    ///
    /// The list is validated with
    /// [`validate_recipe_ingredients`](crate::model::validate_recipe_ingredients)
    /// before anything is written.
    async fn recipe_set_ingredients(
        &self,
        recipe_id: i32,
        items: &[IngredientAmount],
    ) -> anyhow::Result<()>;
}
