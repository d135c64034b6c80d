pub mod request {
    use crate::{modules::auth::middleware::AdminAuth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            length(max = 1000, message = "Reason must be at most 1000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub reason: String,
    }

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        AmendmentDeclined,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AmendmentDeclined => ApiResponse::ok("Amendment declined"),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        AmendmentNotFound,
        NotPending,
        FailedToDeclineAmendment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::AmendmentNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Amendment not found")
                }
                Self::NotPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "Only pending amendments can be declined",
                ),
                Self::FailedToDeclineAmendment => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to decline amendment",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
