pub mod response {
    use crate::{
        modules::admin::repository::AdminLog, types::ApiResponse, utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Logs(Paginated<AdminLog>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Logs(logs) => {
                    ApiResponse::success(StatusCode::OK, "Admin logs fetched", json!(logs))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchLogs,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchLogs => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch admin logs",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
