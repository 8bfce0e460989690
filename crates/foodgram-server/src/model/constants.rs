// Configuration keys and defaults of the Foodgram server

pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const SERVER_CONTEXT_PATH_PROPERTY: &str = "server.context_path";

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_CONTEXT_PATH: &str = "api";

pub const DB_URL_PROPERTY: &str = "db.url";
pub const DB_SCHEMA_AUTO_CREATE: &str = "db.schema.auto_create";

pub const REPORT_FONT_PATH_PROPERTY: &str = "report.font.path";
pub const DEFAULT_REPORT_FONT_PATH: &str = "data/fonts/arial.ttf";

pub const LOGGING_DIR_PROPERTY: &str = "logging.dir";
pub const LOGGING_CONSOLE_PROPERTY: &str = "logging.console";
pub const LOGGING_FILE_PROPERTY: &str = "logging.file";
pub const LOGGING_LEVEL_PROPERTY: &str = "logging.level";
pub const LOGGING_ROTATION_PROPERTY: &str = "logging.rotation";

/// Prefix of environment variables overriding configuration keys
pub const ENV_PREFIX: &str = "FOODGRAM";
