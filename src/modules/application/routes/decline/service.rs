use super::types::{request, response};
use crate::{
    modules::{
        admin,
        application::repository::{self, status::ApprovalStatus, Application},
        notification::service::{self as notification, Notification},
        storage, user,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

fn ensure_pending(application: &Application) -> Result<(), response::Error> {
    match application
        .status()
        .is_some_and(|status| status.can_transition_to(ApprovalStatus::Declined))
    {
        true => Ok(()),
        false => Err(response::Error::NotPending),
    }
}

async fn delete_application(
    ctx: &Context,
    id: &str,
    admin_id: &str,
    reason: &str,
) -> Result<(), response::Error> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToDeclineApplication
    })?;

    let application = repository::find_by_id_for_update(&mut *tx, id)
        .await
        .map_err(|_| response::Error::FailedToDeclineApplication)?
        .ok_or(response::Error::ApplicationNotFound)?;

    ensure_pending(&application)?;

    repository::review::delete_by_application_id(&mut *tx, id)
        .await
        .map_err(|_| response::Error::FailedToDeclineApplication)?;

    repository::delete_by_id(&mut *tx, id)
        .await
        .map_err(|_| response::Error::FailedToDeclineApplication)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: admin_id.to_string(),
            action: "decline_application",
            target_type: "application",
            target_id: id.to_string(),
            details: Some(format!("{}: {}", application.stall_name, reason)),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeclineApplication)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToDeclineApplication
    })
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let reason = payload.body.reason.trim().to_string();

    let application = repository::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeclineApplication)?
        .ok_or(response::Error::ApplicationNotFound)?;

    ensure_pending(&application)?;

    let staged = storage::stage_removal(&ctx.storage, &application.documents.0)
        .await
        .map_err(|_| response::Error::FailedToDeclineApplication)?;

    if let Err(err) =
        delete_application(&ctx, &application.id, &payload.auth.user.id, &reason).await
    {
        staged.restore().await;
        return Err(err);
    }

    staged.purge().await;

    tracing::info!("Application {} declined", application.id);

    match user::repository::find_by_id(&ctx.db_conn.pool, &application.user_id).await {
        Ok(Some(applicant)) => notification::dispatch(
            ctx.clone(),
            Notification::application_declined(&applicant, application.stall_name, reason),
        ),
        Ok(None) => tracing::warn!(
            "Applicant {} vanished before the decline notice was sent",
            application.user_id
        ),
        Err(_) => (),
    }

    Ok(response::Success::ApplicationDeclined)
}
