//! Ingredient persistence trait

use async_trait::async_trait;

use crate::model::IngredientInfo;

#[async_trait]
pub trait IngredientPersistence: Send + Sync {
    /// List ingredients ordered by name, optionally filtered by a
    /// case-insensitive name prefix
    async fn ingredient_find_all(&self, name_prefix: Option<&str>)
    -> anyhow::Result<Vec<IngredientInfo>>;

    /// Find an ingredient by ID
    async fn ingredient_find_by_id(&self, id: i32) -> anyhow::Result<Option<IngredientInfo>>;
}
