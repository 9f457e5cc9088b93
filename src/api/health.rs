use axum::{routing::get, Router};

use crate::state::AppState;

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET / - Health check endpoint
async fn health_check() -> &'static str {
    "Career Flow API is running..."
}
