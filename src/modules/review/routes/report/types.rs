pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            length(max = 500, message = "Reason must be at most 500 characters"),
            custom(function = "validate_not_blank")
        )]
        pub reason: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::review::repository::report::Report, types::ApiResponse, utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ReviewReported(Report),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ReviewReported(report) => {
                    ApiResponse::success(StatusCode::CREATED, "Review reported", json!(report))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ReviewNotFound,
        FailedToReportReview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::ReviewNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Review not found"),
                Self::FailedToReportReview => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to report review",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
