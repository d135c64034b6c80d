pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::application::repository::Application, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Applications(Vec<Application>),
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
