use super::types::{request, response};
use crate::{modules::auth::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::session::delete_by_id(&ctx.db_conn.pool, &payload.auth.session.id)
        .await
        .map_err(|_| response::Error::FailedToSignOut)
        .map(|_| response::Success::SignedOut)
}
