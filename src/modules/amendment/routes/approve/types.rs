pub mod request {
    use crate::modules::auth::middleware::AdminAuth;

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::stall::repository::Stall, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AmendmentApproved(Stall),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AmendmentApproved(stall) => ApiResponse::success(
                    StatusCode::OK,
                    "Amendment approved",
                    json!({ "stall": stall }),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        AmendmentNotFound,
        NotPending,
        StallNotFound,
        StallClosed,
        FailedToApproveAmendment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AmendmentNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Amendment not found")
                }
                Self::NotPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Only pending amendments can be approved",
                ),
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::StallClosed => {
                    ApiResponse::failure(StatusCode::CONFLICT, "The stall has been closed")
                }
                Self::FailedToApproveAmendment => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to approve amendment",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
