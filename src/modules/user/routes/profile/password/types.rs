pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_password_strength};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, message = "Current password is required"))]
        pub current_password: String,
        #[validate(custom(function = "validate_password_strength"))]
        pub password: String,
        #[validate(must_match(other = "password", message = "Passwords do not match"))]
        pub confirm_password: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        PasswordChanged,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordChanged => ApiResponse::ok("Password changed"),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        IncorrectPassword,
        FailedToChangePassword,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::IncorrectPassword => {
                    ApiResponse::failure(StatusCode::BAD_REQUEST, "Current password is incorrect")
                }
                Self::FailedToChangePassword => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to change password",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
