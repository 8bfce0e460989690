//! Configuration management for the Foodgram server
//!
//! Values come from `conf/application.yml`, then `FOODGRAM_`-prefixed
//! environment variables (`FOODGRAM_DB__URL` sets `db.url`), then the
//! command line.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use foodgram_auth::model::{DEFAULT_TOKEN_EXPIRE_SECONDS, TOKEN_EXPIRE_SECONDS, TOKEN_SECRET_KEY};
use foodgram_common::FoodgramError;

use crate::startup::LoggingConfig;

use super::constants::*;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "foodgram-server", version)]
struct Cli {
    /// Configuration file
    #[arg(short = 'c', long = "config", default_value = "conf/application.yml")]
    config_file: String,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(long = "font-path", env = "FOODGRAM_REPORT_FONT")]
    font_path: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

fn config_error(err: config::ConfigError) -> FoodgramError {
    FoodgramError::ConfigError(err.to_string())
}

impl Configuration {
    pub fn new() -> Result<Self, FoodgramError> {
        let args = Cli::parse();

        let mut config_builder = Config::builder()
            .add_source(config::File::with_name(&args.config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override(SERVER_PORT_PROPERTY, i64::from(v))
                .map_err(config_error)?;
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override(DB_URL_PROPERTY, v)
                .map_err(config_error)?;
        }
        if let Some(v) = args.font_path {
            config_builder = config_builder
                .set_override(REPORT_FONT_PATH_PROPERTY, v)
                .map_err(config_error)?;
        }

        let app_config = config_builder.build().map_err(config_error)?;

        Ok(Configuration { config: app_config })
    }

    /// Wrap an already built configuration.
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn server_context_path(&self) -> String {
        self.config
            .get_string(SERVER_CONTEXT_PATH_PROPERTY)
            .unwrap_or(DEFAULT_CONTEXT_PATH.to_string())
    }

    // ========================================================================
    // Auth Configuration
    // ========================================================================

    pub fn token_secret_key(&self) -> String {
        self.config
            .get_string(TOKEN_SECRET_KEY)
            .unwrap_or_default()
    }

    pub fn auth_token_expire_seconds(&self) -> i64 {
        self.config
            .get_int(TOKEN_EXPIRE_SECONDS)
            .unwrap_or(DEFAULT_TOKEN_EXPIRE_SECONDS)
    }

    // ========================================================================
    // Report Configuration
    // ========================================================================

    /// TrueType font used for the shopping-list PDF
    pub fn report_font_path(&self) -> PathBuf {
        self.config
            .get_string(REPORT_FONT_PATH_PROPERTY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_FONT_PATH))
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        if self.config.get_table("logging").is_err() {
            return LoggingConfig::from_env();
        }

        LoggingConfig::from_config(
            self.config.get_string(LOGGING_DIR_PROPERTY).ok(),
            self.config.get_bool(LOGGING_CONSOLE_PROPERTY).unwrap_or(true),
            self.config.get_bool(LOGGING_FILE_PROPERTY).unwrap_or(true),
            self.config
                .get_string(LOGGING_LEVEL_PROPERTY)
                .unwrap_or("info".to_string()),
            self.config.get_string(LOGGING_ROTATION_PROPERTY).ok(),
        )
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub fn schema_auto_create(&self) -> bool {
        self.config.get_bool(DB_SCHEMA_AUTO_CREATE).unwrap_or(false)
    }

    pub fn database_connect_options(&self) -> Result<ConnectOptions, FoodgramError> {
        let max_connections = self
            .config
            .get_int("db.pool.max_connections")
            .unwrap_or(10) as u32;
        let min_connections = self
            .config
            .get_int("db.pool.min_connections")
            .unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.connect_timeout")
            .unwrap_or(30) as u64;
        let acquire_timeout = self
            .config
            .get_int("db.pool.acquire_timeout")
            .unwrap_or(8) as u64;
        let idle_timeout = self
            .config
            .get_int("db.pool.idle_timeout")
            .unwrap_or(10) as u64;
        let max_lifetime = self
            .config
            .get_int("db.pool.max_lifetime")
            .unwrap_or(1800) as u64;
        let sqlx_logging = self
            .config
            .get_bool("db.pool.sqlx_logging")
            .unwrap_or(false);

        let url = self.config.get_string(DB_URL_PROPERTY).map_err(|_| {
            FoodgramError::ConfigError(format!(
                "{} is not set (use --db-url or DATABASE_URL)",
                DB_URL_PROPERTY
            ))
        })?;

        let mut opt = ConnectOptions::new(url);

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        Ok(opt)
    }

    pub async fn database_connection(&self) -> Result<DatabaseConnection, FoodgramError> {
        let opt = self.database_connect_options()?;

        Database::connect(opt).await.map_err(FoodgramError::database)
    }
}
