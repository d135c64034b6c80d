pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::application::repository::Application, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Application(Application),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Application(application) => ApiResponse::success(
                    StatusCode::OK,
                    "Application fetched",
                    json!(application),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        ApplicationNotFound,
        FailedToFetchApplication,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Application not found")
                }
                Self::FailedToFetchApplication => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch application",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
