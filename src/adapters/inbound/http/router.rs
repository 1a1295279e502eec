use axum::{
    Router,
    routing::{get, put},
};
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

use super::{
    handlers::{add_order, get_order, health, list_orders, update_order_status},
    middleware::{cors_layer, trace_layer},
};
use crate::ports::services::OrderService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<dyn OrderService>,
}

impl AppState {
    pub fn new(order_service: Arc<dyn OrderService>) -> Self {
        Self { order_service }
    }
}

/// Create a router with just the order API, relative to its mount point
pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(add_order))
        .route("/orders/{order_id}", get(get_order))
        .route("/orders/{order_id}/status", put(update_order_status))
}

fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", create_order_router())
        .route("/health", get(health))
}

/// Create the main application router with all API endpoints
pub fn create_router(state: AppState) -> Router {
    routes()
        .layer(cors_layer())
        .layer(trace_layer())
        .with_state(state)
}

/// Create the API router plus static frontend files served from `frontend_dir`
pub fn create_router_with_frontend(state: AppState, frontend_dir: impl AsRef<Path>) -> Router {
    routes()
        .fallback_service(ServeDir::new(frontend_dir.as_ref()))
        .layer(cors_layer())
        .layer(trace_layer())
        .with_state(state)
}
