//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start-stop", post(start_stop_handler))
        .route("/reset", post(reset_handler))
        .route("/preset/:name", post(preset_handler))
        .route("/duration", post(duration_handler))
        .route("/duration/edit", post(duration_edit_handler))
        .route("/add-minute", post(add_minute_handler))
        .route("/remove-minute", post(remove_minute_handler))
        .route("/key/:key", post(key_handler))
        .route("/status", get(status_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
