//! Ingredient ledger trait
//!
//! Read-only view over recipe/ingredient associations.

use async_trait::async_trait;

use crate::model::ShoppingListRow;

#[async_trait]
pub trait IngredientLedger: Send + Sync {
    /// Sum ingredient amounts over every recipe in the user's shopping cart.
    ///
    /// Rows are grouped by ingredient ID, so the result holds exactly one row
    /// per distinct ingredient. An empty cart yields an empty vector.
    async fn sum_ingredients_for_cart(&self, user_id: i32) -> anyhow::Result<Vec<ShoppingListRow>>;
}
