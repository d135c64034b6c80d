pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        SignedOut,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedOut => ApiResponse::ok("Signed out"),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToSignOut,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToSignOut => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to sign out")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
