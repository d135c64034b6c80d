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
        modules::application::repository::Application, types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Applications(Paginated<Application>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Applications(applications) => ApiResponse::success(
                    StatusCode::OK,
                    "Applications fetched",
                    json!(applications),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchApplications,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchApplications => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch applications",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
