use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Liveness banner for anyone poking the root URL.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Optimizer API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /api/health
/// Service status plus whether an OpenAI key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "resume-api",
        "version": env!("CARGO_PKG_VERSION"),
        "openai_connected": !state.config.openai_api_key.is_empty(),
    }))
}
