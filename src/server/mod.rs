//! HTTP server for the jira-bridge.
//!
//! # Endpoints
//!
//! - `POST {events_path}` - Slack Events API deliveries (default `/slack/events`)
//! - `GET /health` - Returns 200 if server is running

pub mod error;
pub mod events;
pub mod health;

pub use error::WebhookError;
pub use events::events_handler;
pub use health::health_handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::runtime::Runtime;

/// Builds the axum router with all endpoints.
pub fn build_router(runtime: Runtime) -> Router {
    let events_path = runtime.config.events_path.clone();

    Router::new()
        .route(&events_path, post(events_handler))
        .route("/health", get(health_handler))
        .with_state(runtime)
}
