//! Test fixtures backed by an in-memory SQLite database

#![allow(dead_code)]

use foodgram_persistence::{
    ExternalDbPersistService, create_schema,
    entity::{ingredient, recipe, tag, users},
    sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set},
};

/// Open a fresh in-memory database with the full schema
pub async fn memory_database() -> DatabaseConnection {
    // One connection: every SQLite memory connection is a separate database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite database");
    create_schema(&db).await.expect("Failed to create schema");
    db
}

pub async fn memory_service() -> ExternalDbPersistService {
    ExternalDbPersistService::new(memory_database().await)
}

pub async fn insert_user(db: &DatabaseConnection, username: &str) -> i32 {
    users::ActiveModel {
        email: Set(format!("{username}@foodgram.test")),
        username: Set(username.to_string()),
        first_name: Set(username.to_string()),
        last_name: Set("Tester".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
    .id
}

pub async fn insert_ingredient(db: &DatabaseConnection, name: &str, unit: &str) -> i32 {
    ingredient::ActiveModel {
        name: Set(name.to_string()),
        measurement_unit: Set(unit.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert ingredient")
    .id
}

pub async fn insert_recipe(db: &DatabaseConnection, author_id: i32, name: &str) -> i32 {
    recipe::ActiveModel {
        author_id: Set(author_id),
        name: Set(name.to_string()),
        text: Set(format!("How to cook {name}")),
        cooking_time: Set(30),
        image: Set(Some(format!("recipes/images/{name}.png"))),
        pub_date: Set(chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date")),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert recipe")
    .id
}

pub async fn insert_tag(db: &DatabaseConnection, name: &str, slug: &str) -> i32 {
    tag::ActiveModel {
        name: Set(name.to_string()),
        color: Set(Some("#E26C2D".to_string())),
        slug: Set(slug.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert tag")
    .id
}
