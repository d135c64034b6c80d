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
        modules::amendment::repository::Amendment, types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Amendments(Paginated<Amendment>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Amendments(amendments) => {
                    ApiResponse::success(StatusCode::OK, "Amendments fetched", json!(amendments))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchAmendments,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchAmendments => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch amendments",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
