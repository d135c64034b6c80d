pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
        pub rating: i16,
        #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
        pub title: Option<String>,
        #[validate(
            length(max = 2000, message = "Comment must be at most 2000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub comment: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub stall_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::review::repository::Review, types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ReviewCreated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewCreated(review) => {
                    ApiResponse::success(StatusCode::CREATED, "Review posted", json!(review))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StallNotFound,
        OwnStall,
        AlreadyReviewed,
        FailedToCreateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::OwnStall => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You cannot review your own stall")
                }
                Self::AlreadyReviewed => {
                    ApiResponse::failure(StatusCode::CONFLICT, "You have already reviewed this stall")
                }
                Self::FailedToCreateReview => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to post review")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
