pub mod request {
    use crate::{modules::stall::repository::FindManyFilters, utils::pagination::Pagination};

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: FindManyFilters,
    }
}

pub mod response {
    use crate::{
        modules::stall::repository::StallSummary, types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Stalls(Paginated<StallSummary>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stalls(stalls) => {
                    ApiResponse::success(StatusCode::OK, "Stalls fetched", json!(stalls))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchStalls,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchStalls => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch stalls")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
