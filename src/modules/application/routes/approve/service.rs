use super::types::{request, response};
use crate::{
    modules::{
        admin,
        application::repository::{self, status::ApprovalStatus},
        auth::repository::session,
        notification::service::{self as notification, Notification},
        stall, user,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToApproveApplication
    })?;

    let application = repository::find_by_id_for_update(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToApproveApplication)?
        .ok_or(response::Error::ApplicationNotFound)?;

    if !application
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Approved))
    {
        return Err(response::Error::NotPending);
    }

    let created = stall::repository::create(
        &mut *tx,
        stall::repository::CreateStallPayload {
            owner_id: application.user_id.clone(),
            name: application.stall_name.clone(),
            description: application.description.clone(),
            categories: application.categories.clone(),
            contact_number: application.contact_number.clone(),
            opening_hours: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveApplication)?;

    if let Some(address) = application.address.clone() {
        stall::repository::location::create(
            &mut *tx,
            stall::repository::location::CreateLocationPayload {
                stall_id: created.id.clone(),
                address,
                latitude: application.latitude,
                longitude: application.longitude,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToApproveApplication)?;
    }

    repository::set_status(&mut *tx, &application.id, ApprovalStatus::Approved)
        .await
        .map_err(|_| response::Error::FailedToApproveApplication)?;

    repository::review::create(
        &mut *tx,
        repository::review::CreateApplicationReviewPayload {
            application_id: application.id.clone(),
            reviewer_id: payload.auth.user.id.clone(),
            status: ApprovalStatus::Approved,
            notes: payload.body.notes,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveApplication)?;

    let applicant = user::repository::promote_to_stall_owner(&mut *tx, &application.user_id)
        .await
        .map_err(|_| response::Error::FailedToApproveApplication)?;

    session::update_user_type_by_user_id(&mut *tx, &applicant.id, applicant.user_type_id)
        .await
        .map_err(|_| response::Error::FailedToApproveApplication)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "approve_application",
            target_type: "application",
            target_id: application.id.clone(),
            details: Some(format!("Created stall {} ({})", created.name, created.id)),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToApproveApplication)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToApproveApplication
    })?;

    tracing::info!("Application {} approved as stall {}", application.id, created.id);

    notification::dispatch(
        ctx.clone(),
        Notification::application_approved(&applicant, created.name.clone(), created.id.clone()),
    );

    Ok(response::Success::ApplicationApproved(created))
}
