pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{
        modules::{auth::repository::session::Flash, user::repository::Profile},
        types::ApiResponse,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub struct CurrentSession {
        pub user: Profile,
        pub csrf_token: String,
        pub flash: Option<Flash>,
    }

    pub enum Success {
        Session(CurrentSession),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Session(session) => ApiResponse::success(
                    StatusCode::OK,
                    "Session fetched",
                    json!({
                        "user_id": session.user.id,
                        "user_type": session.user.user_type,
                        "user": session.user,
                        "csrf_token": session.csrf_token,
                        "flash": session.flash,
                    }),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchSession,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchSession => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch session",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
