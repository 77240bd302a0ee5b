use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and active scoring policy.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "readiness-api",
        "scorer_backend": state.scorer.backend(),
        "difficulty_polarity": state.config.difficulty_polarity,
    }))
}
