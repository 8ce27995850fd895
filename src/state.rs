use crate::config::Config;
use crate::store::TodoStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            store: Arc::new(TodoStore::new(config.create_delay)),
        }
    }
}
