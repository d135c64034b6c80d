use super::types::{request, response};
use crate::{
    modules::{
        amendment::repository,
        stall::{repository::StallChanges, service as stall_service},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let changes: StallChanges = payload.body.changes.into();
    if changes.is_empty() {
        return Err(response::Error::NoChanges);
    }

    let stall = stall_service::find_owned(&ctx.db_conn.pool, &payload.stall_id, &payload.auth.user)
        .await
        .map_err(|err| match err {
            stall_service::Error::NotFound => response::Error::StallNotFound,
            stall_service::Error::NotOwner => response::Error::NotStallOwner,
            stall_service::Error::UnexpectedError => response::Error::FailedToRequestAmendment,
        })?;

    let has_pending = repository::has_pending_by_stall_id(&ctx.db_conn.pool, &stall.id)
        .await
        .map_err(|_| response::Error::FailedToRequestAmendment)?;

    if has_pending {
        return Err(response::Error::AlreadyPending);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateAmendmentPayload {
            stall_id: stall.id,
            requester_id: payload.auth.user.id,
            changes,
            reason: payload.body.reason.trim().to_string(),
        },
    )
    .await
    .map(response::Success::AmendmentRequested)
    .map_err(|err| match err {
        repository::Error::Duplicate => response::Error::AlreadyPending,
        repository::Error::UnexpectedError => response::Error::FailedToRequestAmendment,
    })
}
