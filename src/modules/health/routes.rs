use crate::types::Context;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, Router},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Payout server is running!" })),
    )
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "OK",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
