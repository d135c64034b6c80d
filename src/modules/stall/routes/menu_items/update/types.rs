pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::validation::validate_not_blank};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            length(max = 100, message = "Name must be at most 100 characters"),
            custom(function = "validate_not_blank")
        )]
        pub name: Option<String>,
        #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
        pub description: Option<String>,
        #[validate(range(min = 0, message = "Price must not be negative"))]
        pub price_cents: Option<i32>,
        pub is_available: Option<bool>,
    }

    pub struct Payload {
        pub auth: Auth,
        pub stall_id: String,
        pub item_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::stall::repository::menu_item::MenuItem, types::ApiResponse, utils::validation,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MenuItemUpdated(MenuItem),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemUpdated(item) => {
                    ApiResponse::success(StatusCode::OK, "Menu item updated", json!(item))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        StallNotFound,
        NotStallOwner,
        MenuItemNotFound,
        FailedToUpdateMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::NotStallOwner => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You do not own this stall")
                }
                Self::MenuItemNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::FailedToUpdateMenuItem => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update menu item",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
