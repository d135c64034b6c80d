use super::types::{request, response};
use crate::{
    modules::{
        admin,
        application::repository::{self, status::ApprovalStatus},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToArchiveApplication
    })?;

    let application = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToArchiveApplication)?
        .ok_or(response::Error::ApplicationNotFound)?;

    if !application
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Archived))
    {
        return Err(response::Error::NotPending);
    }

    repository::set_status(&mut *tx, &application.id, ApprovalStatus::Archived)
        .await
        .map_err(|_| response::Error::FailedToArchiveApplication)?;

    repository::review::create(
        &mut *tx,
        repository::review::CreateApplicationReviewPayload {
            application_id: application.id.clone(),
            reviewer_id: payload.auth.user.id.clone(),
            status: ApprovalStatus::Archived,
            notes: payload.body.notes.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToArchiveApplication)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "archive_application",
            target_type: "application",
            target_id: application.id.clone(),
            details: payload.body.notes,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToArchiveApplication)?;

    tx.commit()
        .await
        .map(|_| response::Success::ApplicationArchived)
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {:?}", err);
            response::Error::FailedToArchiveApplication
        })
}
