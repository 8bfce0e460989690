// Foodgram server library: HTTP API, configuration and startup

pub mod api; // API handlers and routes
pub mod error; // Error handling and response mapping
pub mod metrics; // Metrics and observability
pub mod middleware; // HTTP middleware
pub mod model; // Configuration, state and response types
pub mod service; // Business services
pub mod startup; // Application startup utilities

pub use error::AppError;
pub use model::{AppState, Configuration};
