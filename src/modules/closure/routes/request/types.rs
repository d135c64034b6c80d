pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            length(max = 1000, message = "Reason must be at most 1000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub reason: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub stall_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::closure::repository::Closure, types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ClosureRequested(Closure),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ClosureRequested(closure) => ApiResponse::success(
                    StatusCode::CREATED,
                    "Closure request submitted",
                    json!(closure),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StallNotFound,
        NotStallOwner,
        AlreadyClosed,
        AlreadyPending,
        FailedToRequestClosure,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::NotStallOwner => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You do not own this stall")
                }
                Self::AlreadyClosed => {
                    ApiResponse::failure(StatusCode::CONFLICT, "This stall is already closed")
                }
                Self::AlreadyPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "This stall already has a closure request awaiting review",
                ),
                Self::FailedToRequestClosure => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit closure request",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
