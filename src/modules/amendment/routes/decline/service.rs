use super::types::{request, response};
use crate::{
    modules::{
        admin,
        amendment::repository,
        application::repository::status::ApprovalStatus,
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
        response::Error::FailedToDeclineAmendment
    })?;

    let amendment = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeclineAmendment)?
        .ok_or(response::Error::AmendmentNotFound)?;

    if !amendment
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Declined))
    {
        return Err(response::Error::NotPending);
    }

    let stall = stall::repository::find_by_id(&mut *tx, &amendment.stall_id)
        .await
        .map_err(|_| response::Error::FailedToDeclineAmendment)?
        .ok_or(response::Error::AmendmentNotFound)?;

    repository::review_by_id(
        &mut *tx,
        &amendment.id,
        repository::ReviewAmendmentPayload {
            status: ApprovalStatus::Declined,
            reviewer_id: payload.auth.user.id.clone(),
            decline_reason: Some(reason.clone()),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeclineAmendment)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "decline_amendment",
            target_type: "amendment",
            target_id: amendment.id.clone(),
            details: Some(reason.clone()),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeclineAmendment)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToDeclineAmendment
    })?;

    if let Ok(Some(requester)) =
        user::repository::find_by_id(&ctx.db_conn.pool, &amendment.requester_id).await
    {
        notification::dispatch(
            ctx.clone(),
            Notification::amendment_reviewed(&requester, stall.name, false, Some(reason)),
        );
    }

    Ok(response::Success::AmendmentDeclined)
}
