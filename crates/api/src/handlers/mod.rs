//! Request handlers and the state they share.

pub mod persons;

use std::sync::Arc;

use db::PersonStore;

/// Shared handler state: the injected record store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }
}
