pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::budget::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Budget API
        .route("/api/v1/budgets", post(handlers::handle_generate_budget))
        .route(
            "/api/v1/budgets/parse",
            post(handlers::handle_parse_preview),
        )
        .with_state(state)
}
