use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::QueryRejection, Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    query: Result<Query<request::Query>, QueryRejection>,
) -> response::Response {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("Rejected payout list query: {}", rejection);
        response::Error::InvalidQuery
    })?;

    service(ctx, request::Payload { query }).await
}
