use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::locations::{CONTENT_PATH, HOME_PATH, RESULTS_PATH};
use crate::query_engine::QueryEngine;

pub mod handlers;
pub mod models;

pub fn create_router(query_engine: Arc<QueryEngine>) -> Router {
    Router::new()
        .route(HOME_PATH, get(handlers::home_handler))
        .route(RESULTS_PATH, get(handlers::results_handler))
        .route(CONTENT_PATH, get(handlers::content_handler))
        .fallback(handlers::not_found_handler)
        .with_state(query_engine)
        .layer(TraceLayer::new_for_http())
}
