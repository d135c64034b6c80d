pub mod request {
    use crate::utils::validation::{validate_not_blank, validate_password_strength};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(
            custom(function = "validate_not_blank"),
            length(max = 100, message = "Name must be at most 100 characters")
        )]
        pub name: String,
        #[validate(email(message = "Email address is invalid"))]
        pub email: String,
        #[validate(must_match(other = "email", message = "Email addresses do not match"))]
        pub confirm_email: String,
        #[validate(custom(function = "validate_password_strength"))]
        pub password: String,
        #[validate(must_match(other = "password", message = "Passwords do not match"))]
        pub confirm_password: String,
    }
}

pub mod response {
    use crate::{
        modules::{auth::service::auth::OpenedSession, user::repository::Profile},
        types::ApiResponse,
        utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        SignedUp(Profile, OpenedSession),
    }

    impl Success {
        pub fn token(&self) -> &str {
            match self {
                Self::SignedUp(_, opened) => &opened.token,
            }
        }
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp(profile, opened) => ApiResponse::success(
                    StatusCode::CREATED,
                    "Account created",
                    json!({
                        "user": profile,
                        "token": opened.token,
                        "csrf_token": opened.session.csrf_token,
                    }),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        SignUpFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::EmailAlreadyInUse => {
                    ApiResponse::failure(StatusCode::CONFLICT, "Email is already in use")
                }
                Self::SignUpFailed => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Sign up failed")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
