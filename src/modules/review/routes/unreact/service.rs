use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let removed =
        repository::reaction::delete(&ctx.db_conn.pool, &payload.id, &payload.auth.user.id)
            .await
            .map_err(|_| response::Error::FailedToRemoveReaction)?;

    match removed {
        0 => Err(response::Error::ReactionNotFound),
        _ => Ok(response::Success::ReactionRemoved),
    }
}
