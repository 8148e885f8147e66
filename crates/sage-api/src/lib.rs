pub mod auth;
pub mod error;
pub mod feedbacks;
pub mod remote;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::AppState;

/// Route table for the feedback pages.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(feedbacks::FEEDBACKS_PATH, get(feedbacks::list_feedbacks))
        .route("/feedbacks/new", post(feedbacks::submit_feedback))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
