//! Shared fixtures for HTTP API tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use config::Config;
use tempfile::TempDir;

use foodgram_auth::model::TOKEN_SECRET_KEY;
use foodgram_auth::service::token::encode_jwt_token;
use foodgram_common::RecipeCollection;
use foodgram_persistence::{
    CollectionPersistence, ExternalDbPersistService, IngredientAmount, IngredientInfo,
    IngredientLedger, IngredientPersistence, PersistenceService, RecipePersistence, RecipeSummary,
    ShoppingListRow, TagInfo, TagPersistence, create_schema,
    entity::{ingredient, recipe, tag, users},
    sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set},
};
use foodgram_report::fixture::write_minimal_font;
use foodgram_server::model::{AppState, Configuration};

/// Build a test service with the authentication middleware and the API routes.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(foodgram_server::middleware::Authentication)
                .app_data(actix_web::web::Data::from($state))
                .service(foodgram_server::api::route::routes("api")),
        )
        .await
    };
}
pub(crate) use init_app;

pub fn secret_key() -> String {
    STANDARD.encode("foodgram-integration-test-secret-0123456789")
}

pub fn token_for(user_id: i32) -> String {
    encode_jwt_token(&user_id.to_string(), &secret_key(), 3600).expect("Failed to encode token")
}

pub fn bearer(user_id: i32) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token_for(user_id)))
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub service: Arc<ExternalDbPersistService>,
    pub font_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite database");
        create_schema(&db).await.expect("Failed to create schema");

        let font_dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_minimal_font(font_dir.path()).expect("Failed to write test font");

        Self {
            service: Arc::new(ExternalDbPersistService::new(db.clone())),
            db,
            font_dir,
        }
    }

    pub fn font_path(&self) -> String {
        self.font_dir
            .path()
            .join("test-font.ttf")
            .to_string_lossy()
            .into_owned()
    }

    pub fn configuration_with_font(&self, font_path: &str) -> Configuration {
        let config = Config::builder()
            .set_override(TOKEN_SECRET_KEY, secret_key())
            .and_then(|b| b.set_override("report.font.path", font_path))
            .and_then(|b| b.build())
            .expect("Failed to build configuration");

        Configuration::from_config(config)
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state_with_font(&self.font_path())
    }

    pub fn state_with_font(&self, font_path: &str) -> Arc<AppState> {
        Arc::new(AppState::new(
            self.configuration_with_font(font_path),
            self.service.clone(),
        ))
    }

    pub async fn user(&self, username: &str) -> i32 {
        users::ActiveModel {
            email: Set(format!("{username}@foodgram.test")),
            username: Set(username.to_string()),
            first_name: Set(username.to_string()),
            last_name: Set("Tester".to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert user")
        .id
    }

    pub async fn ingredient(&self, name: &str, unit: &str) -> i32 {
        ingredient::ActiveModel {
            name: Set(name.to_string()),
            measurement_unit: Set(unit.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert ingredient")
        .id
    }

    /// Insert a recipe owned by `author_id` made of `(ingredient_id, amount)` pairs.
    pub async fn recipe(&self, author_id: i32, name: &str, items: &[(i32, i32)]) -> i32 {
        let recipe_id = recipe::ActiveModel {
            author_id: Set(author_id),
            name: Set(name.to_string()),
            text: Set(format!("How to cook {name}")),
            cooking_time: Set(45),
            image: Set(None),
            pub_date: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert recipe")
        .id;

        let items: Vec<IngredientAmount> = items
            .iter()
            .map(|(id, amount)| IngredientAmount::new(*id, *amount))
            .collect();
        self.service
            .recipe_set_ingredients(recipe_id, &items)
            .await
            .expect("Failed to set recipe ingredients");

        recipe_id
    }

    pub async fn tag(&self, name: &str, slug: &str) -> i32 {
        tag::ActiveModel {
            name: Set(name.to_string()),
            color: Set(None),
            slug: Set(slug.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .expect("Failed to insert tag")
        .id
    }

    pub async fn add_to_cart(&self, user_id: i32, recipe_id: i32) {
        self.service
            .collection_add(RecipeCollection::ShoppingCart, user_id, recipe_id)
            .await
            .expect("Failed to add recipe to cart");
    }
}

/// Storage backend whose every operation fails
pub struct UnavailableStorage;

fn unavailable<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl IngredientLedger for UnavailableStorage {
    async fn sum_ingredients_for_cart(&self, _user_id: i32) -> anyhow::Result<Vec<ShoppingListRow>> {
        unavailable()
    }
}

#[async_trait]
impl CollectionPersistence for UnavailableStorage {
    async fn collection_contains(
        &self,
        _collection: RecipeCollection,
        _user_id: i32,
        _recipe_id: i32,
    ) -> anyhow::Result<bool> {
        unavailable()
    }

    async fn collection_add(
        &self,
        _collection: RecipeCollection,
        _user_id: i32,
        _recipe_id: i32,
    ) -> anyhow::Result<()> {
        unavailable()
    }

    async fn collection_remove(
        &self,
        _collection: RecipeCollection,
        _user_id: i32,
        _recipe_id: i32,
    ) -> anyhow::Result<u64> {
        unavailable()
    }
}

#[async_trait]
impl RecipePersistence for UnavailableStorage {
    async fn recipe_find_summary(&self, _recipe_id: i32) -> anyhow::Result<Option<RecipeSummary>> {
        unavailable()
    }

    async fn recipe_set_ingredients(
        &self,
        _recipe_id: i32,
        _items: &[IngredientAmount],
    ) -> anyhow::Result<()> {
        unavailable()
    }
}

#[async_trait]
impl IngredientPersistence for UnavailableStorage {
    async fn ingredient_find_all(
        &self,
        _name_prefix: Option<&str>,
    ) -> anyhow::Result<Vec<IngredientInfo>> {
        unavailable()
    }

    async fn ingredient_find_by_id(&self, _id: i32) -> anyhow::Result<Option<IngredientInfo>> {
        unavailable()
    }
}

#[async_trait]
impl TagPersistence for UnavailableStorage {
    async fn tag_find_all(&self) -> anyhow::Result<Vec<TagInfo>> {
        unavailable()
    }

    async fn tag_find_by_id(&self, _id: i32) -> anyhow::Result<Option<TagInfo>> {
        unavailable()
    }
}

#[async_trait]
impl PersistenceService for UnavailableStorage {
    async fn health_check(&self) -> anyhow::Result<()> {
        unavailable()
    }
}
