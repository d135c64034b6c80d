pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        ReactionRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReactionRemoved => ApiResponse::ok("Reaction removed"),
            }
            .into_response()
        }
    }

    pub enum Error {
        ReactionNotFound,
        FailedToRemoveReaction,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReactionNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Reaction not found")
                }
                Self::FailedToRemoveReaction => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to remove reaction",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
