use super::types::{request, response};
use crate::{
    modules::payout::model::{CreatePayoutParams, PayoutMethod, DEFAULT_CURRENCY},
    types::Context,
    utils::validation,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payout request: {errors}");
        response::Error::FailedToValidate(validation::first_message(&errors))
    })?;

    let Some(amount) = payload.body.amount else {
        return Err(response::Error::FailedToValidate(
            "Amount is required".to_string(),
        ));
    };

    let params = CreatePayoutParams {
        amount,
        currency: payload
            .body
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        method: PayoutMethod::Instant,
        destination: payload.body.destination,
    };

    tracing::info!(
        amount = params.amount,
        currency = %params.currency,
        destination = ?params.destination,
        "Creating payout"
    );

    let payout = ctx
        .provider
        .create_payout(params, payload.idempotency_key)
        .await
        .map_err(|err| {
            tracing::error!(kind = ?err.kind, "Failed to create payout: {}", err);
            response::Error::FailedToCreatePayout(err.message)
        })?;

    tracing::info!(
        payout_id = %payout.id,
        amount = payout.amount,
        currency = %payout.currency,
        status = %payout.status,
        "Payout created"
    );

    Ok(response::Success::PayoutCreated(payout))
}
