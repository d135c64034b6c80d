pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_contact_number};
    use serde::Deserialize;
    use validator::Validate;

    /// Operational details an owner may change directly. Name, description
    /// and categories go through an amendment request.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_contact_number"))]
        pub contact_number: Option<String>,
        #[validate(length(min = 1, max = 100, message = "Opening hours must be 1 to 100 characters"))]
        pub opening_hours: Option<String>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::stall::repository::Stall, types::ApiResponse, utils::validation};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        StallUpdated(Stall),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StallUpdated(stall) => {
                    ApiResponse::success(StatusCode::OK, "Stall updated", json!(stall))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StallNotFound,
        NotStallOwner,
        FailedToUpdateStall,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::NotStallOwner => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You do not own this stall")
                }
                Self::FailedToUpdateStall => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update stall")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
