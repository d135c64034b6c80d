use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let review = repository::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToReact)?
        .filter(|review| !review.is_hidden)
        .ok_or(response::Error::ReviewNotFound)?;

    repository::reaction::upsert(
        &ctx.db_conn.pool,
        &review.id,
        &payload.auth.user.id,
        payload.body.reaction,
    )
    .await
    .map(|_| response::Success::Reacted(payload.body.reaction))
    .map_err(|_| response::Error::FailedToReact)
}
