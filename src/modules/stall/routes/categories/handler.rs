use crate::{modules::stall::repository::STALL_CATEGORIES, types::ApiResponse};
use axum::{http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn handler() -> impl IntoResponse {
    ApiResponse::success(StatusCode::OK, "Categories fetched", json!(STALL_CATEGORIES))
}
