use super::types::{request, response};
use crate::{
    modules::{
        admin,
        review::repository::{self, moderation, report},
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

    let action = payload.body.action;
    let reason = payload.body.reason.trim().to_string();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToModerateReview
    })?;

    let review = repository::find_by_id(&mut *tx, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToModerateReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if review.is_hidden == action.hides() {
        return Err(response::Error::NothingToChange);
    }

    repository::set_hidden(&mut *tx, &review.id, action.hides())
        .await
        .map_err(|_| response::Error::FailedToModerateReview)?;

    moderation::create(
        &mut *tx,
        moderation::CreateModerationPayload {
            review_id: review.id.clone(),
            moderator_id: payload.auth.user.id.clone(),
            action,
            reason: reason.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToModerateReview)?;

    let resolved = report::resolve_by_review_id(&mut *tx, &review.id)
        .await
        .map_err(|_| response::Error::FailedToModerateReview)?;

    admin::repository::create(
        &mut *tx,
        admin::repository::CreateAdminLogPayload {
            admin_id: payload.auth.user.id,
            action: match action.hides() {
                true => "hide_review",
                false => "restore_review",
            },
            target_type: "review",
            target_id: review.id.clone(),
            details: Some(reason),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToModerateReview)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {:?}", err);
        response::Error::FailedToModerateReview
    })?;

    tracing::info!(
        "Review {} moderated ({}), {} report(s) resolved",
        review.id,
        action.to_string(),
        resolved
    );

    Ok(response::Success::ReviewModerated(action))
}
