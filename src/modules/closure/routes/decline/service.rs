use super::types::{request, response};
use crate::{
    modules::{
        admin,
        application::repository::status::ApprovalStatus,
        closure::repository,
        notification::service::{self as notification, Notification},
        stall, user,
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

    let reason = payload.body.reason.trim().to_string();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToDeclineClosure
    })?;

    let closure = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeclineClosure)?
        .ok_or(response::Error::ClosureNotFound)?;

    if !closure
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Declined))
    {
        return Err(response::Error::NotPending);
    }

    let stall = stall::repository::find_by_id(&mut *tx, &closure.stall_id)
        .await
        .map_err(|_| response::Error::FailedToDeclineClosure)?
        .ok_or(response::Error::ClosureNotFound)?;

    repository::review_by_id(
        &mut *tx,
        &closure.id,
        repository::ReviewClosurePayload {
            status: ApprovalStatus::Declined,
            reviewer_id: payload.auth.user.id.clone(),
            decline_reason: Some(reason.clone()),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeclineClosure)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "decline_closure",
            target_type: "closure",
            target_id: closure.id.clone(),
            details: Some(reason.clone()),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeclineClosure)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToDeclineClosure
    })?;

    if let Ok(Some(requester)) =
        user::repository::find_by_id(&ctx.db_conn.pool, &closure.requester_id).await
    {
        notification::dispatch(
            ctx.clone(),
            Notification::closure_reviewed(&requester, stall.name, false, Some(reason)),
        );
    }

    Ok(response::Success::ClosureDeclined)
}
