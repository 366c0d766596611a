//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::connector::api::Container;

#[derive(Clone)]
pub struct AppState {
    pub container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}
