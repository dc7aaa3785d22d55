pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout/zones", post(handlers::handle_zones))
        .route("/api/v1/layout/validate", post(handlers::handle_validate))
        .route("/api/v1/layout/compose", post(handlers::handle_compose))
        .with_state(state)
}
