//! Main entry point for the Foodgram server.

use std::sync::Arc;

use foodgram_persistence::{ExternalDbPersistService, PersistenceService, create_schema};
use foodgram_server::{
    model::{AppState, Configuration},
    startup,
};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    foodgram_server::metrics::init_metrics();

    let db = configuration.database_connection().await?;
    if configuration.schema_auto_create() {
        create_schema(&db).await?;
    }

    let persistence: Arc<dyn PersistenceService> = Arc::new(ExternalDbPersistService::new(db));
    if let Err(e) = persistence.health_check().await {
        warn!("Database health check failed: {}", e);
    }

    let font_path = configuration.report_font_path();
    if !font_path.is_file() {
        warn!(
            path = %font_path.display(),
            "Report font not found; shopping list downloads will fail"
        );
    }

    if configuration.token_secret_key().is_empty() {
        warn!("Token secret key is not configured; every token will be rejected");
    }

    let address = configuration.server_address();
    let port = configuration.server_port();
    let context_path = configuration.server_context_path();

    info!("Foodgram server listening on {}:{}/{}", address, port, context_path);

    let app_state = Arc::new(AppState::new(configuration, persistence));

    startup::main_server(app_state, context_path, address, port)?.await?;

    Ok(())
}
