use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::HeaderMap,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    headers: HeaderMap,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected payout request body: {}", rejection);
        response::Error::InvalidPayload
    })?;

    let idempotency_key = headers
        .get("idempotency-key")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    service(
        ctx,
        request::Payload {
            body,
            idempotency_key,
        },
    )
    .await
}
