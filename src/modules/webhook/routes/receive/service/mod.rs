mod handler;

use super::types::{request, response};
use crate::{
    modules::webhook::{
        event::{Event, EventError, EventKind},
        signature,
    },
    types::Context,
};
use chrono::Utc;
use std::sync::Arc;

fn dispatch(event: Event) {
    match event.kind {
        EventKind::PayoutCreated(payout) => handler::payout_created::handler(&event.id, &payout),
        EventKind::PayoutFailed(payout) => handler::payout_failed::handler(&event.id, &payout),
        EventKind::PayoutPaid(payout) => handler::payout_paid::handler(&event.id, &payout),
        EventKind::Unhandled { event_type } => {
            tracing::info!(event_id = %event.id, event_type = %event_type, "Unhandled webhook event type");
        }
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let Some(secret) = ctx.payment.webhook_secret.as_deref() else {
        tracing::warn!("Received webhook but no signing secret is configured");
        return Err(response::Error::NotConfigured);
    };

    let header = payload.signature.ok_or_else(|| {
        tracing::warn!("Webhook is missing a valid Stripe-Signature header");
        response::Error::SignatureVerificationFailed
    })?;

    signature::verify(
        secret,
        &header,
        payload.body.as_ref(),
        ctx.payment.webhook_tolerance,
        Utc::now().timestamp(),
    )
    .map_err(|err| {
        tracing::warn!("Webhook signature verification failed: {}", err);
        response::Error::SignatureVerificationFailed
    })?;

    match Event::parse(payload.body.as_ref()) {
        Ok(event) => dispatch(event),
        Err(EventError::InvalidEnvelope(err)) => {
            tracing::warn!("Failed to parse webhook event: {}", err);
            return Err(response::Error::InvalidPayload);
        }
        Err(err @ EventError::InvalidObject { .. }) => {
            tracing::warn!("Skipping webhook event: {}", err);
        }
    }

    Ok(response::Success::Received)
}
