//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::registry::ActivityRegistry;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:name/signup", post(handlers::signup))
        .route("/activities/:name/unregister", post(handlers::unregister))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convenience helper wiring a registry straight into a router
pub fn create_router_with_registry(registry: Arc<ActivityRegistry>) -> Router {
    create_router(AppState::new(registry))
}
