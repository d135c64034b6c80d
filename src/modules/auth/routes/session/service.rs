use super::types::{request, response};
use crate::{modules::auth::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let flash = repository::session::take_flash(&ctx.db_conn.pool, &payload.auth.session.id)
        .await
        .map_err(|_| response::Error::FailedToFetchSession)?;

    Ok(response::Success::Session(response::CurrentSession {
        user: (&payload.auth.user).into(),
        csrf_token: payload.auth.session.csrf_token,
        flash,
    }))
}
