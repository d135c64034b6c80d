pub mod request {
    use crate::{
        modules::{auth::middleware::Auth, stall::repository::is_known_category},
        utils::validation::{validate_contact_number, validate_not_blank},
    };
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use std::borrow::Cow;
    use tempfile::NamedTempFile;
    use validator::{Validate, ValidationError};

    fn validate_categories(categories: &[String]) -> Result<(), ValidationError> {
        match !categories.is_empty() && categories.iter().all(|category| is_known_category(category)) {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_CATEGORIES")
                .with_message(Cow::from("Pick at least one category from the list"))),
        }
    }

    #[derive(TryFromMultipart, Validate)]
    pub struct Body {
        #[validate(
            length(max = 100, message = "Stall name must be at most 100 characters"),
            custom(function = "validate_not_blank")
        )]
        pub stall_name: String,
        #[validate(
            length(max = 2000, message = "Description must be at most 2000 characters"),
            custom(function = "validate_not_blank")
        )]
        pub description: String,
        #[validate(custom(function = "validate_categories"))]
        pub categories: Vec<String>,
        #[validate(custom(function = "validate_contact_number"))]
        pub contact_number: Option<String>,
        #[validate(length(min = 1, max = 255, message = "Address must be 1 to 255 characters"))]
        pub address: Option<String>,
        #[validate(range(min = -90.0, max = 90.0, message = "Latitude is out of range"))]
        pub latitude: Option<f64>,
        #[validate(range(min = -180.0, max = 180.0, message = "Longitude is out of range"))]
        pub longitude: Option<f64>,
        #[form_data(limit = "10MiB")]
        pub business_permit: FieldData<NamedTempFile>,
        #[form_data(limit = "10MiB")]
        pub sanitary_permit: Option<FieldData<NamedTempFile>>,
        #[form_data(limit = "10MiB")]
        pub dti_certificate: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::application::repository::Application, types::ApiResponse, utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ApplicationSubmitted(Application),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ApplicationSubmitted(application) => ApiResponse::success(
                    StatusCode::CREATED,
                    "Application submitted",
                    json!(application),
                ),
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        AlreadyPending,
        UnsupportedDocument(String),
        DocumentTooLarge(String),
        DocumentUploadFailed,
        FailedToSubmitApplication,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::AlreadyPending => ApiResponse::failure(
                    StatusCode::CONFLICT,
                    "You already have an application awaiting review",
                ),
                Self::UnsupportedDocument(kind) => ApiResponse::failure(
                    StatusCode::BAD_REQUEST,
                    format!("{} must be a PDF, JPG or PNG file", kind),
                ),
                Self::DocumentTooLarge(kind) => ApiResponse::failure(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    format!("{} must be at most 10 MiB", kind),
                ),
                Self::DocumentUploadFailed => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to upload documents",
                ),
                Self::FailedToSubmitApplication => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit application",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
