pub mod request {
    use crate::{modules::user::repository::FindManyFilters, utils::pagination::Pagination};

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: FindManyFilters,
    }
}

pub mod response {
    use crate::{
        modules::user::repository::Profile,
        types::ApiResponse,
        utils::pagination::Paginated,
    };
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Users(Paginated<Profile>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Users(users) => {
                    ApiResponse::success(StatusCode::OK, "Users fetched", json!(users))
                }
            }
            .into_response()
        }
    }

    pub enum Error {
        FailedToFetchUsers,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchUsers => {
                    ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch users")
                }
            }
            .into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
