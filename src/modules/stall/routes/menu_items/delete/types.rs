pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
        pub stall_id: String,
        pub item_id: String,
    }
}

pub mod response {
    use crate::types::ApiResponse;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        MenuItemDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItemDeleted => ApiResponse::ok("Menu item deleted"),
            }
            .into_response()
        }
    }

    pub enum Error {
        StallNotFound,
        NotStallOwner,
        MenuItemNotFound,
        FailedToDeleteMenuItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::NotStallOwner => {
                    ApiResponse::failure(StatusCode::FORBIDDEN, "You do not own this stall")
                }
                Self::MenuItemNotFound => {
                    ApiResponse::failure(StatusCode::NOT_FOUND, "Menu item not found")
                }
                Self::FailedToDeleteMenuItem => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to delete menu item",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
