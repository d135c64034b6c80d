pub mod response {
    use crate::{
        modules::review::repository::report::OpenReport, types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reports(Paginated<OpenReport>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reports(reports) => {
                    ApiResponse::success(StatusCode::OK, "Open reports fetched", json!(reports))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchReports,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchReports => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch reports",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
