use std::sync::Arc;

use crate::{config::Config, store::PostStore};

/// Handed to every handler. Cloning only bumps the `Arc` counts; all
/// handlers share the one store built at start-up.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(PostStore::new()),
            config: Arc::new(config),
        }
    }
}
