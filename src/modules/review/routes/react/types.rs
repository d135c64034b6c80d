pub mod request {
    use crate::modules::{auth::middleware::Auth, review::repository::reaction::Reaction};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub reaction: Reaction,
    }

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::review::repository::reaction::Reaction, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Reacted(Reaction),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Reacted(reaction) => ApiResponse::success(
                    StatusCode::OK,
                    "Reaction saved",
                    json!({ "reaction": reaction }),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        ReviewNotFound,
        FailedToReact,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Review not found"),
                Self::FailedToReact => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save reaction")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
