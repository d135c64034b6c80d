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

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToApproveAmendment
    })?;

    let amendment = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToApproveAmendment)?
        .ok_or(response::Error::AmendmentNotFound)?;

    if !amendment
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Approved))
    {
        return Err(response::Error::NotPending);
    }

    let current = stall::repository::find_by_id_for_update(&mut *tx, &amendment.stall_id)
        .await
        .map_err(|_| response::Error::FailedToApproveAmendment)?
        .ok_or(response::Error::StallNotFound)?;

    if !current.is_active() {
        return Err(response::Error::StallClosed);
    }

    let updated = stall::repository::update_by_id(&mut *tx, &current.id, amendment.changes.0.clone())
        .await
        .map_err(|_| response::Error::FailedToApproveAmendment)?;

    repository::review_by_id(
        &mut *tx,
        &amendment.id,
        repository::ReviewAmendmentPayload {
            status: ApprovalStatus::Approved,
            reviewer_id: payload.auth.user.id.clone(),
            decline_reason: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveAmendment)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "approve_amendment",
            target_type: "amendment",
            target_id: amendment.id.clone(),
            details: Some(format!("Updated stall {}", updated.id)),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveAmendment)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToApproveAmendment
    })?;

    if let Ok(Some(requester)) =
        user::repository::find_by_id(&ctx.db_conn.pool, &amendment.requester_id).await
    {
        notification::dispatch(
            ctx.clone(),
            Notification::amendment_reviewed(&requester, updated.name.clone(), true, None),
        );
    }

    Ok(response::Success::AmendmentApproved(updated))
}
