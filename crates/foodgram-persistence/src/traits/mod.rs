//! Persistence traits for the storage abstraction layer
//!
//! The aggregation core only depends on [`IngredientLedger`]; the remaining
//! traits back the cart, favorite, ingredient and tag lookup endpoints.

pub mod collection;
pub mod ingredient;
pub mod ledger;
pub mod recipe;
pub mod tag;

pub use collection::CollectionPersistence;
pub use ingredient::IngredientPersistence;
pub use ledger::IngredientLedger;
pub use recipe::RecipePersistence;
pub use tag::TagPersistence;

use async_trait::async_trait;

/// Unified persistence service trait
///
/// This is the main interface handed to the HTTP layer.
#[async_trait]
pub trait PersistenceService:
    IngredientLedger
    + CollectionPersistence
    + RecipePersistence
    + IngredientPersistence
    + TagPersistence
    + Send
    + Sync
{
    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;
}
