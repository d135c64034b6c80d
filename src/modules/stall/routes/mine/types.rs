pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::stall::repository::StallSummary, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Stalls(Vec<StallSummary>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stalls(stalls) => {
                    ApiResponse::success(StatusCode::OK, "Stalls fetched", json!(stalls))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchStalls,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchStalls => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch stalls")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
