pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // two PDF parts plus multipart framing overhead
    let body_limit = 2 * state.config.max_upload_bytes + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
