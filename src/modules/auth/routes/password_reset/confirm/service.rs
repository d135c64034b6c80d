use super::types::{request, response};
use crate::{
    modules::{auth::repository, user},
    types::Context,
    utils::{password, token},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::FailedToResetPassword)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToResetPassword
    })?;

    let reset_token =
        repository::reset_token::find_usable_by_id(&mut *tx, &token::digest(&payload.token))
            .await
            .map_err(|_| response::Error::FailedToResetPassword)?
            .ok_or(response::Error::InvalidToken)?;

    user::repository::update_by_id(
        &mut *tx,
        &reset_token.user_id,
        user::repository::UpdateUserPayload {
            password_hash: Some(password_hash),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToResetPassword)?;

    repository::reset_token::mark_as_used(&mut *tx, &reset_token.id)
        .await
        .map_err(|_| response::Error::FailedToResetPassword)?;

    let revoked = repository::session::delete_by_user_id(&mut *tx, &reset_token.user_id)
        .await
        .map_err(|_| response::Error::FailedToResetPassword)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToResetPassword
    })?;

    tracing::info!(
        "Password reset for user {}, {} session(s) revoked",
        reset_token.user_id,
        revoked
    );

    Ok(response::Success::PasswordReset)
}
