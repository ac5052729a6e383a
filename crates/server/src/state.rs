use std::sync::Arc;
use tokio::sync::RwLock;

use reformat_core::{Config, ConversionEngine, SessionHistory};

/// Shared application state
pub struct AppState {
    config: Config,
    engine: Arc<dyn ConversionEngine>,
    history: RwLock<SessionHistory>,
}

impl AppState {
    pub fn new(config: Config, engine: Arc<dyn ConversionEngine>) -> Self {
        Self {
            config,
            engine,
            history: RwLock::new(SessionHistory::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &dyn ConversionEngine {
        self.engine.as_ref()
    }

    pub fn history(&self) -> &RwLock<SessionHistory> {
        &self.history
    }
}
