use super::types::{request, response};
use crate::{
    modules::payout::model::{parse_limit, CreatedFilter, ListPayoutsParams},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let query = payload.query;

    let created = query
        .created
        .as_deref()
        .filter(|created| !created.is_empty())
        .map(CreatedFilter::parse)
        .transpose()
        .map_err(|_| {
            tracing::warn!("Rejected created filter: {:?}", query.created);
            response::Error::InvalidCreatedFilter
        })?;

    let limit = parse_limit(query.limit.as_deref()).map_err(|_| {
        tracing::warn!("Rejected payout list limit: {:?}", query.limit);
        response::Error::InvalidQuery
    })?;

    let params = ListPayoutsParams {
        created,
        limit,
        starting_after: query.starting_after,
        ending_before: query.ending_before,
    };

    tracing::debug!(limit = params.limit, created = ?params.created, "Listing payouts");

    ctx.provider
        .list_payouts(params)
        .await
        .map(response::Success::Payouts)
        .map_err(|err| {
            tracing::error!(kind = ?err.kind, "Failed to list payouts: {}", err);
            response::Error::FailedToFetchPayouts(err.message)
        })
}
