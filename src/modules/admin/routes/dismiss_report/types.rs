pub mod request {
    use crate::modules::auth::middleware::AdminAuth;

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        ReportDismissed,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReportDismissed => ApiResponse::ok("Report dismissed"),
            }
            .into_response()
        }
    }

    pub enum Error {
        ReportNotFound,
        AlreadyResolved,
        FailedToDismissReport,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReportNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Report not found"),
                Self::AlreadyResolved => {
                    ApiResponse::failure(StatusCode::CONFLICT, "Report is already resolved")
                }
                Self::FailedToDismissReport => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to dismiss report",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
