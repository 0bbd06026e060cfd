pub mod health;
pub mod payout;
pub mod webhook;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

/// Routes served under `/api`.
pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(payout::routes::get_router())
        .merge(webhook::routes::get_router())
}
