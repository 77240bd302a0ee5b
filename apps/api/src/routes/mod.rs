pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::heatmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Heatmap API
        .route("/api/v1/heatmap", post(handlers::handle_compute_heatmap))
        .route("/api/v1/heatmap/domains", get(handlers::handle_list_domains))
        .route(
            "/api/v1/heatmap/benchmarks/:seniority",
            get(handlers::handle_get_benchmarks),
        )
        .route("/api/v1/seniority", post(handlers::handle_infer_seniority))
        .with_state(state)
}
