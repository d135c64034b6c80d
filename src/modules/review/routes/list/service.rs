use super::types::{request, response};
use crate::{
    modules::{review::repository, stall::service as stall_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    stall_service::find_active(&ctx.db_conn.pool, &payload.stall_id)
        .await
        .map_err(|err| match err {
            stall_service::Error::UnexpectedError => response::Error::FailedToFetchReviews,
            _ => response::Error::StallNotFound,
        })?;

    repository::find_many_visible_by_stall_id(
        &ctx.db_conn.pool,
        &payload.stall_id,
        payload.pagination,
    )
    .await
    .map(response::Success::Reviews)
    .map_err(|_| response::Error::FailedToFetchReviews)
}
