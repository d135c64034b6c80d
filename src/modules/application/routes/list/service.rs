use super::types::{request, response};
use crate::{modules::application::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_many(
        &ctx.db_conn.pool,
        payload.pagination,
        payload.filters.status,
    )
    .await
    .map(response::Success::Applications)
    .map_err(|_| response::Error::FailedToFetchApplications)
}
