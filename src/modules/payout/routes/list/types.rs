pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        pub created: Option<String>,
        pub limit: Option<String>,
        pub starting_after: Option<String>,
        pub ending_before: Option<String>,
    }

    pub struct Payload {
        pub query: Query,
    }
}

pub mod response {
    use crate::modules::payout::model::PayoutList;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Payouts(PayoutList),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Payouts(list) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "payouts": list.data,
                        "has_more": list.has_more,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidQuery,
        InvalidCreatedFilter,
        FailedToFetchPayouts(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidQuery => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Invalid query parameters" })),
                )
                    .into_response(),
                Self::InvalidCreatedFilter => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Invalid created filter, expected a timestamp or start..end"
                    })),
                )
                    .into_response(),
                Self::FailedToFetchPayouts(message) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": message })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
