pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub stall_id: String,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::review::repository::ReviewListing, types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reviews(Paginated<ReviewListing>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reviews(reviews) => {
                    ApiResponse::success(StatusCode::OK, "Reviews fetched", json!(reviews))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        StallNotFound,
        FailedToFetchReviews,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::FailedToFetchReviews => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch reviews",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
