pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(message = "Email address is invalid"))]
        pub email: String,
    }
}

pub mod response {
    use crate::{types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        ResetRequested,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ResetRequested => ApiResponse::ok(
                    "If an account exists for that email, a reset code has been sent",
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToRequestReset,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::FailedToRequestReset => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to request a password reset",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
