#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use payout_server::{
    app,
    modules::payout::{
        model::{CreatePayoutParams, ListPayoutsParams, Payout, PayoutList},
        provider::{self, PayoutProvider},
    },
    types::{AppContext, Context, PaymentContext},
};
use serde_json::{json, Map, Value};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tower::ServiceExt;

pub const WEBHOOK_SECRET: &str = "whsec_test_secret";

pub fn payout(id: &str, amount: i64, currency: &str, status: &str) -> Payout {
    let mut extra = Map::new();
    extra.insert("object".to_string(), json!("payout"));
    extra.insert("method".to_string(), json!("instant"));

    Payout {
        id: id.to_string(),
        amount,
        currency: currency.to_string(),
        status: status.to_string(),
        failure_code: None,
        failure_message: None,
        extra,
    }
}

/// Records every call and answers with canned payouts, or with `failure`
/// when one is set.
#[derive(Default)]
pub struct MockProvider {
    pub created: Mutex<Vec<(CreatePayoutParams, Option<String>)>>,
    pub retrieved: Mutex<Vec<String>>,
    pub listed: Mutex<Vec<ListPayoutsParams>>,
    pub failure: Option<provider::Error>,
    pub has_more: bool,
}

impl MockProvider {
    pub fn failing(kind: provider::ErrorKind, message: &str) -> Self {
        Self {
            failure: Some(provider::Error::new(kind, message)),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len()
            + self.retrieved.lock().unwrap().len()
            + self.listed.lock().unwrap().len()
    }

    fn result<T>(&self, value: T) -> Result<T, provider::Error> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl PayoutProvider for MockProvider {
    async fn create_payout(
        &self,
        params: CreatePayoutParams,
        idempotency_key: Option<String>,
    ) -> Result<Payout, provider::Error> {
        self.created
            .lock()
            .unwrap()
            .push((params.clone(), idempotency_key));
        self.result(payout("po_test", params.amount, &params.currency, "pending"))
    }

    async fn retrieve_payout(&self, id: &str) -> Result<Payout, provider::Error> {
        self.retrieved.lock().unwrap().push(id.to_string());
        self.result(payout(id, 1000, "usd", "paid"))
    }

    async fn list_payouts(&self, params: ListPayoutsParams) -> Result<PayoutList, provider::Error> {
        self.listed.lock().unwrap().push(params);
        self.result(PayoutList {
            data: vec![
                payout("po_1", 1000, "usd", "paid"),
                payout("po_2", 2500, "usd", "in_transit"),
            ],
            has_more: self.has_more,
        })
    }
}

pub fn context(provider: Arc<MockProvider>, webhook_secret: Option<&str>) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        payment: PaymentContext {
            webhook_secret: webhook_secret.map(|secret| secret.to_string()),
            webhook_tolerance: Duration::from_secs(300),
        },
        provider,
    })
}

pub fn router(provider: Arc<MockProvider>) -> Router {
    app::router(context(provider, Some(WEBHOOK_SECRET)))
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
