pub mod request {
    use crate::{
        modules::{
            auth::middleware::Auth,
            stall::repository::{is_known_category, StallChanges},
        },
        utils::validation::{validate_contact_number, validate_not_blank},
    };
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_categories(categories: &[String]) -> Result<(), ValidationError> {
        match !categories.is_empty() && categories.iter().all(|category| is_known_category(category)) {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_CATEGORIES")
                .with_message(Cow::from("Pick at least one category from the list"))),
        }
    }

    #[derive(Deserialize, Validate, Default)]
    pub struct Changes {
        #[validate(
            length(max = 100, message = "Stall name must be at most 100 characters"),
            custom(function = "validate_not_blank")
        )]
        pub name: Option<String>,
        #[validate(
            length(max = 2000, message = "Description must be at most 2000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub description: Option<String>,
        #[validate(custom(function = "validate_categories"))]
        pub categories: Option<Vec<String>>,
        #[validate(custom(function = "validate_contact_number"))]
        pub contact_number: Option<String>,
        #[validate(length(min = 1, max = 100, message = "Opening hours must be 1 to 100 characters"))]
        pub opening_hours: Option<String>,
    }

    impl From<Changes> for StallChanges {
        fn from(changes: Changes) -> Self {
            Self {
                name: changes.name.map(|name| name.trim().to_string()),
                description: changes.description.map(|description| description.trim().to_string()),
                categories: changes.categories,
                contact_number: changes.contact_number,
                opening_hours: changes.opening_hours,
            }
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(nested)]
        pub changes: Changes,
        #[validate(
            length(max = 1000, message = "Reason must be at most 1000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub reason: String,
    }

    pub struct Payload {
        pub auth: Auth,
        pub stall_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::amendment::repository::Amendment, types::ApiResponse, utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AmendmentRequested(Amendment),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AmendmentRequested(amendment) => ApiResponse::success(
                    StatusCode::CREATED,
                    "Amendment request submitted",
                    json!(amendment),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        NoChanges,
        StallNotFound,
        NotStallOwner,
        AlreadyPending,
        FailedToRequestAmendment,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::NoChanges => {
                    ApiResponse::failure(StatusCode::BAD_REQUEST, "Request at least one change")
                }
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::NotStallOwner => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You do not own this stall")
                }
                Self::AlreadyPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "This stall already has an amendment awaiting review",
                ),
                Self::FailedToRequestAmendment => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit amendment request",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
