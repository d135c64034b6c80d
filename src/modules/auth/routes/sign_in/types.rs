pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(message = "Email address is invalid"))]
        pub email: String,
        #[validate(length(min = 1, message = "Password is required"))]
        pub password: String,
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
        SignedIn(Profile, OpenedSession),
    }

    impl Success {
        pub fn token(&self) -> &str {
            match self {
                Self::SignedIn(_, opened) => &opened.token,
            }
        }
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn(profile, opened) => ApiResponse::success(
                    StatusCode::OK,
                    "Signed in",
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
        InvalidCredentials,
        SignInFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::InvalidCredentials => {
                    ApiResponse::failure(StatusCode::UNAUTHORIZED, "Invalid email or password")
                }
                Self::SignInFailed => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Sign in failed")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
