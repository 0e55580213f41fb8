//! Sample to-do CRUD service bundled with generated projects.
//!
//! Everything lives in memory: restarting the process empties the list.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub use store::{Todo, TodoPatch, TodoStore};

/// Builds the router over an explicitly owned store.
pub fn build_router(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health_handler))
        .route(
            "/api/v1/todos",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route(
            "/api/v1/todos/",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route(
            "/api/v1/todos/:id",
            get(handlers::handle_get)
                .patch(handlers::handle_update)
                .delete(handlers::handle_delete),
        )
        .layer(CorsLayer::permissive())
        .with_state(store)
}
