use super::types::{request, response};
use crate::{
    modules::{admin::repository, review::repository::report},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let existing = report::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToDismissReport)?
        .ok_or(response::Error::ReportNotFound)?;

    if existing.is_resolved {
        return Err(response::Error::AlreadyResolved);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToDismissReport
    })?;

    report::resolve_by_id(&mut *tx, &existing.id)
        .await
        .map_err(|_| response::Error::FailedToDismissReport)?;

    repository::create(
        &mut *tx,
        repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: "dismiss_report",
            target_type: "report",
            target_id: existing.id,
            details: None,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDismissReport)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToDismissReport
    })?;

    Ok(response::Success::ReportDismissed)
}
