//! Shopping cart and favorites persistence trait

use async_trait::async_trait;

use foodgram_common::RecipeCollection;

#[async_trait]
pub trait CollectionPersistence: Send + Sync {
    /// Check whether the recipe is in the user's collection
    async fn collection_contains(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<bool>;

    /// Insert the recipe into the user's collection
    async fn collection_add(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<()>;

    /// Remove the recipe from the user's collection, returning the number of deleted rows
    async fn collection_remove(
        &self,
        collection: RecipeCollection,
        user_id: i32,
        recipe_id: i32,
    ) -> anyhow::Result<u64>;
}
