pub mod request {
    use crate::modules::auth::middleware::AdminAuth;
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    pub struct Body {
        pub notes: Option<String>,
    }

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::stall::repository::Stall, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ApplicationApproved(Stall),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationApproved(stall) => ApiResponse::success(
                    StatusCode::OK,
                    "Application approved",
                    json!({ "stall": stall }),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        ApplicationNotFound,
        NotPending,
        FailedToApproveApplication,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Application not found")
                }
                Self::NotPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Only pending applications can be approved",
                ),
                Self::FailedToApproveApplication => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to approve application",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
