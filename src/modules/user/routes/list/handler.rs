use super::{service::service, types::request};
use crate::{
    modules::{auth::middleware::AdminAuth, user::repository::FindManyFilters},
    types::Context,
    utils::{extract::Query, pagination::Pagination},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: AdminAuth,
    pagination: Pagination,
    Query(filters): Query<FindManyFilters>,
) -> impl IntoResponse {
    service(ctx, request::Payload { pagination, filters }).await
}
