use crate::modules::payout::model::Payout;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct EventData {
    object: Value,
}

#[derive(Deserialize)]
struct Envelope {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    data: EventData,
}

#[derive(Debug, PartialEq)]
pub enum EventKind {
    PayoutCreated(Payout),
    PayoutFailed(Payout),
    PayoutPaid(Payout),
    Unhandled { event_type: String },
}

#[derive(Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid event envelope: {0}")]
    InvalidEnvelope(serde_json::Error),
    #[error("event {id} of type {event_type} does not carry a payout: {source}")]
    InvalidObject {
        id: String,
        event_type: String,
        source: serde_json::Error,
    },
}

impl Event {
    pub fn parse(body: &[u8]) -> Result<Self, EventError> {
        let envelope =
            serde_json::from_slice::<Envelope>(body).map_err(EventError::InvalidEnvelope)?;

        let payout = |object: Value| {
            serde_json::from_value::<Payout>(object).map_err(|source| EventError::InvalidObject {
                id: envelope.id.clone(),
                event_type: envelope.event_type.clone(),
                source,
            })
        };

        let kind = match envelope.event_type.as_str() {
            "payout.created" => EventKind::PayoutCreated(payout(envelope.data.object)?),
            "payout.failed" => EventKind::PayoutFailed(payout(envelope.data.object)?),
            "payout.paid" => EventKind::PayoutPaid(payout(envelope.data.object)?),
            other => EventKind::Unhandled {
                event_type: other.to_string(),
            },
        };

        Ok(Self {
            id: envelope.id,
            kind,
        })
    }
}
