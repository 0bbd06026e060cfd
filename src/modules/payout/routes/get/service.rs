use super::types::{request, response};
use crate::{modules::payout::provider::ErrorKind, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let id = payload.id.trim();

    if id.is_empty() {
        return Err(response::Error::MissingPayoutId);
    }

    ctx.provider
        .retrieve_payout(id)
        .await
        .map(response::Success::Payout)
        .map_err(|err| match err.kind {
            ErrorKind::InvalidRequest => {
                tracing::warn!("Payout {} not found: {}", id, err);
                response::Error::PayoutNotFound
            }
            _ => {
                tracing::error!(kind = ?err.kind, "Failed to retrieve payout {}: {}", id, err);
                response::Error::FailedToFetchPayout(err.message)
            }
        })
}
