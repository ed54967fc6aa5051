pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::{self, MAX_UPLOAD_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/upload", post(handlers::handle_upload))
        .route("/api/history", get(handlers::handle_history))
        // Slack above the file cap so the handler's own size check produces
        // the user-facing message instead of a bare 413.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
