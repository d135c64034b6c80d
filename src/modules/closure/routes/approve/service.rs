use super::types::{request, response};
use crate::{
    modules::{
        admin,
        application::repository::status::ApprovalStatus,
        closure::repository,
        notification::service::{self as notification, Notification},
        stall::{self, repository::StallStatus},
        user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToApproveClosure
    })?;

    let closure = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToApproveClosure)?
        .ok_or(response::Error::ClosureNotFound)?;

    if !closure
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Approved))
    {
        return Err(response::Error::NotPending);
    }

    let stall = stall::repository::find_by_id_for_update(&mut *tx, &closure.stall_id)
        .await
        .map_err(|_| response::Error::FailedToApproveClosure)?
        .ok_or(response::Error::ClosureNotFound)?;

    stall::repository::set_status(&mut *tx, &stall.id, StallStatus::Closed)
        .await
        .map_err(|_| response::Error::FailedToApproveClosure)?;

    repository::review_by_id(
        &mut *tx,
        &closure.id,
        repository::ReviewClosurePayload {
            status: ApprovalStatus::Approved,
            reviewer_id: payload.auth.user.id.clone(),
            decline_reason: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveClosure)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "approve_closure",
            target_type: "closure",
            target_id: closure.id.clone(),
            details: Some(format!("Closed stall {}", stall.id)),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveClosure)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToApproveClosure
    })?;

    tracing::info!("Stall {} closed by request {}", stall.id, closure.id);

    if let Ok(Some(requester)) =
        user::repository::find_by_id(&ctx.db_conn.pool, &closure.requester_id).await
    {
        notification::dispatch(
            ctx.clone(),
            Notification::closure_reviewed(&requester, stall.name, true, None),
        );
    }

    Ok(response::Success::ClosureApproved)
}
