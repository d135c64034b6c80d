pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            length(max = 100, message = "Name must be at most 100 characters"),
            custom(function = "validate_not_blank")
        )]
        pub name: Option<String>,
        #[validate(email(message = "Email address is invalid"))]
        pub email: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::user::repository::Profile, types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ProfileUpdated(Profile),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileUpdated(profile) => {
                    ApiResponse::success(StatusCode::OK, "Profile updated", json!(profile))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailTaken,
        FailedToUpdateProfile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::EmailTaken => {
                    ApiResponse::failure(StatusCode::CONFLICT, "Email address is already in use")
                }
                Self::FailedToUpdateProfile => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update profile",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
