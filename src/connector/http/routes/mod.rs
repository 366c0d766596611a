//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - the web UI at `/`
//! - `/health`
//! - the category endpoints under `/api`
//! - CORS and per-request tracing layers

mod health;
mod prompts;
mod ui;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::connector::http::middleware::{cors_layer, trace_middleware};
use crate::connector::http::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>, cors_origins: Option<&str>) -> Router {
    Router::new()
        .merge(ui::router())
        .merge(health::router())
        .merge(prompts::router())
        // Outermost layers execute first on the way in.
        .layer(cors_layer(cors_origins))
        .layer(middleware::from_fn(trace_middleware))
        .with_state(state)
}
