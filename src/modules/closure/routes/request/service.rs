use super::types::{request, response};
use crate::{
    modules::{closure::repository, stall},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let stall = stall::repository::find_by_id(&ctx.db_conn.pool, &payload.stall_id)
        .await
        .map_err(|_| response::Error::FailedToRequestClosure)?
        .ok_or(response::Error::StallNotFound)?;

    if !stall::repository::is_owner(&payload.auth.user, &stall) {
        return Err(response::Error::NotStallOwner);
    }

    if !stall.is_active() {
        return Err(response::Error::AlreadyClosed);
    }

    let has_pending = repository::has_pending_by_stall_id(&ctx.db_conn.pool, &stall.id)
        .await
        .map_err(|_| response::Error::FailedToRequestClosure)?;

    if has_pending {
        return Err(response::Error::AlreadyPending);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateClosurePayload {
            stall_id: stall.id,
            requester_id: payload.auth.user.id,
            reason: payload.body.reason.trim().to_string(),
        },
    )
    .await
    .map(response::Success::ClosureRequested)
    .map_err(|err| match err {
        repository::Error::Duplicate => response::Error::AlreadyPending,
        repository::Error::UnexpectedError => response::Error::FailedToRequestClosure,
    })
}
