use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use super::{admin, amendment, application, auth, closure, review, stall, user};
use crate::types::{ApiResponse, Context};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    ApiResponse::ok("Welcome to BuzzarFeed API")
}

async fn not_found() -> impl IntoResponse {
    ApiResponse::failure(StatusCode::NOT_FOUND, "Route not found")
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::get_router())
        .nest("/users", user::get_router())
        .nest("/stalls", stall::get_router())
        .merge(review::get_router())
        .merge(application::get_router())
        .merge(amendment::get_router())
        .merge(closure::get_router())
        .merge(admin::get_router())
        .fallback(not_found)
}
