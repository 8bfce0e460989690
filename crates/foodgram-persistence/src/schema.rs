//! Schema bootstrap derived from the entity definitions
//!
//! Creates the tables and the composite unique indexes the entity macros
//! cannot express. Every statement is `IF NOT EXISTS`, so running it against
//! an already provisioned database is a no-op.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, Schema,
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
};
use tracing::info;

use crate::entity::{cart, favorite, ingredient, recipe, recipe_ingredient, tag, users};

fn table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

/// Composite unique constraints of the data model
pub fn unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("unique_ingredient")
            .table(ingredient::Entity)
            .col(ingredient::Column::Name)
            .col(ingredient::Column::MeasurementUnit)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("unique_recipe_ingredient")
            .table(recipe_ingredient::Entity)
            .col(recipe_ingredient::Column::IngredientId)
            .col(recipe_ingredient::Column::RecipeId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("unique_cart")
            .table(cart::Entity)
            .col(cart::Column::UserId)
            .col(cart::Column::RecipeId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("unique_favorite")
            .table(favorite::Entity)
            .col(favorite::Column::UserId)
            .col(favorite::Column::RecipeId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}

/// Create all tables and unique indexes
pub async fn create_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Referenced tables first
    let tables = [
        table(&schema, users::Entity),
        table(&schema, ingredient::Entity),
        table(&schema, tag::Entity),
        table(&schema, recipe::Entity),
        table(&schema, recipe_ingredient::Entity),
        table(&schema, cart::Entity),
        table(&schema, favorite::Entity),
    ];

    for statement in &tables {
        db.execute(backend.build(statement)).await?;
    }

    for index in &unique_indexes() {
        db.execute(backend.build(index)).await?;
    }

    info!("Database schema ready ({} tables)", tables.len());

    Ok(())
}
