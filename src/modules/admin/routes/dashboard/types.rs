pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct Dashboard {
        pub users: i64,
        pub active_stalls: i64,
        pub pending_applications: i64,
        pub pending_amendments: i64,
        pub pending_closures: i64,
        pub open_reports: i64,
    }

    pub enum Success {
        Dashboard(Dashboard),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard(dashboard) => {
                    ApiResponse::success(StatusCode::OK, "Dashboard fetched", json!(dashboard))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchDashboard,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDashboard => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch dashboard",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
