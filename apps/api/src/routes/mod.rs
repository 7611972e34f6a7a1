pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

/// Uploads (résumé PDFs, recorded answers) can exceed Axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/interviews", post(handlers::handle_start))
        .route(
            "/api/v1/interviews/:session_id/answer",
            post(handlers::handle_answer),
        )
        .route(
            "/api/v1/interviews/:session_id/report",
            post(handlers::handle_report),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
