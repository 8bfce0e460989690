//! Foodgram Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions
//! - Persistence trait abstractions, including the read-only ingredient ledger
//! - Domain model types for persistence operations
//! - A SQL backend and schema bootstrap

pub mod entity;
pub mod model;
pub mod schema;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;

// Re-export persistence traits
pub use traits::{
    CollectionPersistence, IngredientLedger, IngredientPersistence, PersistenceService,
    RecipePersistence, TagPersistence,
};

// Re-export SQL backend
pub use sql::ExternalDbPersistService;

// Re-export schema bootstrap
pub use schema::create_schema;

// Re-export model types
pub use model::{
    IngredientAmount, IngredientInfo, RecipeSummary, ShoppingListRow, TagInfo,
    validate_recipe_ingredients,
};
