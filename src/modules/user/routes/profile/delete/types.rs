pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub confirm_email: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        AccountDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountDeleted => ApiResponse::ok("Account deleted"),
            }
            .into_response()
        }
    }

    pub enum Error {
        EmailMismatch,
        AdminHasHistory,
        FailedToDeleteAccount,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::EmailMismatch => ApiResponse::failure(
                    StatusCode::BAD_REQUEST,
                    "Confirmation email does not match your account",
                ),
                Self::AdminHasHistory => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Admin accounts with recorded actions cannot be deleted",
                ),
                Self::FailedToDeleteAccount => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to delete account",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
