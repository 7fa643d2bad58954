//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing), and creates
//! the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Message CRUD endpoints
    let api = Router::new()
        .route("/messages", get(handlers::list_messages))
        .route("/messages", post(handlers::create_message))
        .route("/messages/{id}", get(handlers::get_message))
        .route("/messages/{id}", put(handlers::update_message))
        .route("/messages/{id}", delete(handlers::delete_message));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
