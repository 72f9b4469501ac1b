pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roles", get(handlers::list_roles))
        .route("/api/start-interview", post(handlers::start_interview))
        .route("/api/submit-answer", post(handlers::submit_answer))
        .route("/api/get-summary", get(handlers::get_summary))
        .with_state(state)
}
