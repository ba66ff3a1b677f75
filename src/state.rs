//! Shared application state for all routes.

use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
}

impl AppState {
    pub fn new(store: impl CustomerStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
