pub mod stripe;

use super::model::{CreatePayoutParams, ListPayoutsParams, Payout, PayoutList};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was rejected by the provider, including unknown ids.
    InvalidRequest,
    Authentication,
    RateLimit,
    Idempotency,
    Api,
    Connection,
    Decode,
}

impl ErrorKind {
    /// Classifies a provider error from the HTTP status and the `error.type`
    /// field of the response body.
    pub fn classify(status: u16, error_type: Option<&str>) -> Self {
        match (status, error_type) {
            (401 | 403, _) => Self::Authentication,
            (429, _) => Self::RateLimit,
            (_, Some("invalid_request_error")) => Self::InvalidRequest,
            (_, Some("idempotency_error")) => Self::Idempotency,
            _ => Self::Api,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub code: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }
}

#[async_trait]
pub trait PayoutProvider: Send + Sync {
    async fn create_payout(
        &self,
        params: CreatePayoutParams,
        idempotency_key: Option<String>,
    ) -> Result<Payout, Error>;

    async fn retrieve_payout(&self, id: &str) -> Result<Payout, Error>;

    async fn list_payouts(&self, params: ListPayoutsParams) -> Result<PayoutList, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_provider_errors() {
        assert_eq!(
            ErrorKind::classify(404, Some("invalid_request_error")),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            ErrorKind::classify(400, Some("invalid_request_error")),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            ErrorKind::classify(401, Some("invalid_request_error")),
            ErrorKind::Authentication
        );
        assert_eq!(ErrorKind::classify(429, None), ErrorKind::RateLimit);
        assert_eq!(
            ErrorKind::classify(400, Some("idempotency_error")),
            ErrorKind::Idempotency
        );
        assert_eq!(ErrorKind::classify(500, Some("api_error")), ErrorKind::Api);
        assert_eq!(ErrorKind::classify(502, None), ErrorKind::Api);
    }
}
