//! Application state shared across all handlers

use std::sync::Arc;

use foodgram_persistence::PersistenceService;

use super::config::Configuration;

pub struct AppState {
    pub configuration: Configuration,
    pub persistence: Arc<dyn PersistenceService>,
}

impl AppState {
    pub fn new(configuration: Configuration, persistence: Arc<dyn PersistenceService>) -> Self {
        Self {
            configuration,
            persistence,
        }
    }

    pub fn persistence(&self) -> &dyn PersistenceService {
        self.persistence.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}
