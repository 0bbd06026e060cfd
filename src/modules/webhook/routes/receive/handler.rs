use super::{
    service::service,
    types::{request, response},
};
use crate::{modules::webhook::signature::StripeSignature, types::Context};
use axum::extract::State;
use axum_extra::TypedHeader;
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    signature: Option<TypedHeader<StripeSignature>>,
    body: Bytes,
) -> response::Response {
    service(
        ctx,
        request::Payload {
            signature: signature.map(|TypedHeader(signature)| signature),
            body,
        },
    )
    .await
}
