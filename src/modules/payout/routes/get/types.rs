pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::payout::model::Payout;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Payout(Payout),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Payout(payout) => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "payout": payout })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MissingPayoutId,
        PayoutNotFound,
        FailedToFetchPayout(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingPayoutId => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Payout ID is required" })),
                )
                    .into_response(),
                Self::PayoutNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "error": "Payout not found" })),
                )
                    .into_response(),
                Self::FailedToFetchPayout(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
