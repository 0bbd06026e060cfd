pub mod request {
    use crate::modules::webhook::signature::StripeSignature;
    use bytes::Bytes;

    pub struct Payload {
        pub signature: Option<StripeSignature>,
        pub body: Bytes,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Received,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Received => (StatusCode::OK, Json(json!({ "received": true }))).into_response(),
            }
        }
    }

    pub enum Error {
        NotConfigured,
        SignatureVerificationFailed,
        InvalidPayload,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let message = match self {
                Self::NotConfigured => "Webhook secret not configured",
                Self::SignatureVerificationFailed => "Webhook signature verification failed",
                Self::InvalidPayload => "Invalid webhook payload",
            };

            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "received": false, "error": message })),
            )
                .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
