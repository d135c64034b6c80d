pub mod request {
    pub struct Payload {
        pub stall_id: String,
    }
}

pub mod response {
    use crate::{modules::stall::repository::menu_item::MenuItem, types::ApiResponse};
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuItems(Vec<MenuItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuItems(items) => {
                    ApiResponse::success(StatusCode::OK, "Menu items fetched", json!(items))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        StallNotFound,
        FailedToFetchMenuItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::FailedToFetchMenuItems => ApiResponse::failure(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch menu items",
                ),
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
