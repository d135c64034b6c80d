pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
        pub rating: Option<i16>,
        #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
        pub title: Option<String>,
        #[validate(
            length(max = 2000, message = "Comment must be at most 2000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub comment: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::review::repository::Review, types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ReviewUpdated(Review),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewUpdated(review) => {
                    ApiResponse::success(StatusCode::OK, "Review updated", json!(review))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ReviewNotFound,
        NotReviewAuthor,
        FailedToUpdateReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::ReviewNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Review not found"),
                Self::NotReviewAuthor => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You can only edit your own reviews")
                }
                Self::FailedToUpdateReview => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update review",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
