pub mod request {
    use crate::{
        modules::{auth::middleware::AdminAuth, review::repository::moderation::ModerationAction},
        utils::validation::validate_not_blank,
    };
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        pub action: ModerationAction,
        #[validate(
            length(max = 1000, message = "Reason must be at most 1000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub reason: String,
    }

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::review::repository::moderation::ModerationAction, types::ApiResponse,
        utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        ReviewModerated(ModerationAction),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewModerated(ModerationAction::Hide) => ApiResponse::ok("Review hidden"),
                Self::ReviewModerated(ModerationAction::Restore) => {
                    ApiResponse::ok("Review restored")
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ReviewNotFound,
        NothingToChange,
        FailedToModerateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::ReviewNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Review not found"),
                Self::NothingToChange => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Review is already in the requested state",
                ),
                Self::FailedToModerateReview => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to moderate review",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
