pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{
        modules::stall::repository::{location::Location, menu_item::MenuItem, StallSummary},
        types::ApiResponse,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct StallDetails {
        #[serde(flatten)]
        pub stall: StallSummary,
        pub location: Option<Location>,
        pub menu_items: Vec<MenuItem>,
    }

    pub enum Success {
        Stall(StallDetails),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Stall(details) => {
                    ApiResponse::success(StatusCode::OK, "Stall fetched", json!(details))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        StallNotFound,
        FailedToFetchStall,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StallNotFound => ApiResponse::failure(StatusCode::NOT_FOUND, "Stall not found"),
                Self::FailedToFetchStall => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch stall")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
