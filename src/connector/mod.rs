//! # Connector Layer
//!
//! External integrations and front ends:
//! - Completion and image clients (OpenAI-compatible, Anthropic, mocks)
//! - One-shot CLI controllers
//! - HTTP API and embedded web UI (Axum)
//! - Interactive terminal shell

pub mod adapter;
pub mod api;
pub mod http;
pub mod shell;

pub use adapter::*;
pub use api::{Container, ContainerConfig, Provider};
