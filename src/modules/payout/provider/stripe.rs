use super::{Error, ErrorKind, PayoutProvider};
use crate::modules::payout::model::{
    CreatePayoutParams, CreatedFilter, ListPayoutsParams, Payout, PayoutList,
};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use ulid::Ulid;

const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(500);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(2);

#[derive(Deserialize)]
struct StripeErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
    code: Option<String>,
}

#[derive(Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorBody,
}

struct SendStripeRequestPayload {
    route: String,
    method: Method,
    query: Option<Vec<(String, String)>>,
    form: Option<Vec<(String, String)>>,
    idempotency_key: Option<String>,
}

/// Payout operations against the Stripe REST API.
pub struct StripeClient {
    http: reqwest::Client,
    api_endpoint: String,
    secret_key: String,
    max_network_retries: u32,
}

impl StripeClient {
    pub fn new(
        api_endpoint: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
        max_network_retries: u32,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                tracing::error!("Failed to build Stripe http client: {}", err);
                Error::new(ErrorKind::Connection, err.to_string())
            })?;

        Ok(Self {
            http,
            api_endpoint: api_endpoint.into(),
            secret_key: secret_key.into(),
            max_network_retries,
        })
    }

    fn retry_delay(attempt: u32) -> Duration {
        INITIAL_RETRY_DELAY
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(MAX_RETRY_DELAY)
    }

    fn should_retry(res: &reqwest::Response) -> bool {
        if let Some(hint) = res
            .headers()
            .get("stripe-should-retry")
            .and_then(|value| value.to_str().ok())
        {
            return hint == "true";
        }

        let status = res.status();
        status == StatusCode::CONFLICT
            || status == StatusCode::TOO_MANY_REQUESTS
            || status.is_server_error()
    }

    async fn send<R: DeserializeOwned>(&self, payload: SendStripeRequestPayload) -> Result<R, Error> {
        let url = format!("{}{}", self.api_endpoint, payload.route);
        let mut attempt = 0;

        loop {
            let mut req = self
                .http
                .request(payload.method.clone(), &url)
                .bearer_auth(&self.secret_key);

            if let Some(query) = &payload.query {
                req = req.query(query);
            }

            if let Some(form) = &payload.form {
                req = req.form(form);
            }

            if let Some(key) = &payload.idempotency_key {
                req = req.header("Idempotency-Key", key);
            }

            let res = match req.send().await {
                Ok(res) => res,
                Err(err) => {
                    if attempt < self.max_network_retries && (err.is_connect() || err.is_timeout())
                    {
                        tracing::warn!("Stripe request to {} failed, retrying: {}", url, err);
                        tokio::time::sleep(Self::retry_delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }

                    tracing::error!("Failed to send Stripe request: {}", err);
                    return Err(Error::new(
                        ErrorKind::Connection,
                        "An error occurred with our connection to the payment provider",
                    ));
                }
            };

            let status = res.status();

            if !status.is_success() && attempt < self.max_network_retries && Self::should_retry(&res)
            {
                tracing::warn!("Stripe responded with {}, retrying {}", status, url);
                tokio::time::sleep(Self::retry_delay(attempt)).await;
                attempt += 1;
                continue;
            }

            let data = res.text().await.map_err(|err| {
                tracing::error!("Failed to read Stripe response body: {}", err);
                Error::new(ErrorKind::Connection, err.to_string())
            })?;

            tracing::trace!("Response received from Stripe: {}", data);

            if !status.is_success() {
                return Err(Self::decode_error(status, &data));
            }

            return serde_json::from_str::<R>(&data).map_err(|err| {
                tracing::error!("Failed to decode Stripe response: {}", err);
                Error::new(
                    ErrorKind::Decode,
                    "Received an unreadable response from the payment provider",
                )
            });
        }
    }

    fn decode_error(status: StatusCode, data: &str) -> Error {
        match serde_json::from_str::<StripeErrorResponse>(data) {
            Ok(StripeErrorResponse { error }) => {
                let kind = ErrorKind::classify(status.as_u16(), error.error_type.as_deref());
                tracing::error!(
                    "Stripe request failed with {} ({:?}): {:?}",
                    status,
                    kind,
                    error.message
                );
                Error {
                    kind,
                    message: error
                        .message
                        .unwrap_or_else(|| format!("Payment provider responded with {}", status)),
                    code: error.code,
                }
            }
            Err(_) => {
                tracing::error!("Stripe request failed with {}: {}", status, data);
                Error::new(
                    ErrorKind::classify(status.as_u16(), None),
                    format!("Payment provider responded with {}", status),
                )
            }
        }
    }
}

pub(crate) fn create_payout_form(params: &CreatePayoutParams) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), params.amount.to_string()),
        ("currency".to_string(), params.currency.clone()),
        ("method".to_string(), params.method.as_str().to_string()),
    ];

    if let Some(destination) = &params.destination {
        form.push(("destination".to_string(), destination.clone()));
    }

    form
}

pub(crate) fn list_payouts_query(params: &ListPayoutsParams) -> Vec<(String, String)> {
    let mut query = vec![("limit".to_string(), params.limit.to_string())];

    match &params.created {
        Some(CreatedFilter::Exact(created)) => {
            query.push(("created".to_string(), created.to_string()));
        }
        Some(CreatedFilter::Range { gte, lte }) => {
            query.push(("created[gte]".to_string(), gte.to_string()));
            query.push(("created[lte]".to_string(), lte.to_string()));
        }
        None => (),
    }

    if let Some(cursor) = &params.starting_after {
        query.push(("starting_after".to_string(), cursor.clone()));
    }

    if let Some(cursor) = &params.ending_before {
        query.push(("ending_before".to_string(), cursor.clone()));
    }

    query
}

#[async_trait]
impl PayoutProvider for StripeClient {
    async fn create_payout(
        &self,
        params: CreatePayoutParams,
        idempotency_key: Option<String>,
    ) -> Result<Payout, Error> {
        let idempotency_key = idempotency_key.unwrap_or_else(|| Ulid::new().to_string());

        self.send(SendStripeRequestPayload {
            route: "/v1/payouts".to_string(),
            method: Method::POST,
            query: None,
            form: Some(create_payout_form(&params)),
            idempotency_key: Some(idempotency_key),
        })
        .await
    }

    async fn retrieve_payout(&self, id: &str) -> Result<Payout, Error> {
        self.send(SendStripeRequestPayload {
            route: format!("/v1/payouts/{}", urlencoding::encode(id)),
            method: Method::GET,
            query: None,
            form: None,
            idempotency_key: None,
        })
        .await
    }

    async fn list_payouts(&self, params: ListPayoutsParams) -> Result<PayoutList, Error> {
        self.send(SendStripeRequestPayload {
            route: "/v1/payouts".to_string(),
            method: Method::GET,
            query: Some(list_payouts_query(&params)),
            form: None,
            idempotency_key: None,
        })
        .await
    }
}
