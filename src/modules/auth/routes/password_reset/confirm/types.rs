pub mod request {
    use crate::utils::validation::validate_password_strength;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(min = 1, message = "Reset code is required"))]
        pub token: String,
        #[validate(custom(function = "validate_password_strength"))]
        pub password: String,
        #[validate(must_match(other = "password", message = "Passwords do not match"))]
        pub confirm_password: String,
    }
}

pub mod response {
    use crate::{types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        PasswordReset,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordReset => {
                    ApiResponse::ok("Password updated, please sign in with your new password")
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidToken,
        FailedToResetPassword,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::InvalidToken => ApiResponse::failure(
                    StatusCode::BAD_REQUEST,
                    "Reset code is invalid or has expired",
                ),
                Self::FailedToResetPassword => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to reset password",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
