pub mod request {
    use crate::{
        modules::application::repository::status::ApprovalStatus, utils::pagination::Pagination,
    };
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub status: Option<ApprovalStatus>,
    }

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{
        modules::closure::repository::Closure, types::ApiResponse, utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Closures(Paginated<Closure>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Closures(closures) => ApiResponse::success(
                    StatusCode::OK,
                    "Closure requests fetched",
                    json!(closures),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchClosures,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchClosures => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch closure requests",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
