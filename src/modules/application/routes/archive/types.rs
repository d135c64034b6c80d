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
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        ApplicationArchived,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationArchived => ApiResponse::ok("Application archived"),
            }
            .into_response()
        }
    }

    pub enum Error {
        ApplicationNotFound,
        NotPending,
        FailedToArchiveApplication,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Application not found")
                }
                Self::NotPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Only pending applications can be archived",
                ),
                Self::FailedToArchiveApplication => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to archive application",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
