pub mod request {
    use crate::modules::auth::middleware::AdminAuth;

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        ClosureApproved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ClosureApproved => ApiResponse::ok("Closure approved"),
            }
            .into_response()
        }
    }

    pub enum Error {
        ClosureNotFound,
        NotPending,
        FailedToApproveClosure,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ClosureNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Closure request not found")
                }
                Self::NotPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Only pending closure requests can be approved",
                ),
                Self::FailedToApproveClosure => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to approve closure request",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
