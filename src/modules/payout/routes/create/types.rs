pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            required(message = "Amount is required"),
            range(min = 1, message = "Amount must be greater than 0")
        )]
        pub amount: Option<i64>,
        #[validate(length(equal = 3, message = "Currency must be a three-letter code"))]
        pub currency: Option<String>,
        pub destination: Option<String>,
    }

    pub struct Payload {
        pub body: Body,
        pub idempotency_key: Option<String>,
    }
}

pub mod response {
    use crate::modules::payout::model::Payout;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PayoutCreated(Payout),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PayoutCreated(payout) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "payout": payout })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload,
        FailedToValidate(String),
        FailedToCreatePayout(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidPayload => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid request body" })),
                )
                    .into_response(),
                Self::FailedToValidate(message) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": message })),
                )
                    .into_response(),
                Self::FailedToCreatePayout(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
