pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        ReviewDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewDeleted => ApiResponse::ok("Review deleted"),
            }
            .into_response()
        }
    }

    pub enum Error {
        ReviewNotFound,
        NotReviewAuthor,
        FailedToDeleteReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Review not found"),
                Self::NotReviewAuthor => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You can only delete your own reviews")
                }
                Self::FailedToDeleteReview => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to delete review",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
