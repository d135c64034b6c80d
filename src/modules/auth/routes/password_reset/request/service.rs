use super::types::{request, response};
use crate::{
    modules::{
        auth::{repository, service::auth},
        notification::service::{self as notification, Notification},
        user,
    },
    types::Context,
    utils::token,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use validator::Validate;

const RESET_TOKEN_LENGTH: usize = 40;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let user = match user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::FailedToRequestReset)?
    {
        Some(user) => user,
        None => {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(response::Success::ResetRequested);
        }
    };

    let raw_token = token::generate(RESET_TOKEN_LENGTH);

    repository::reset_token::create(
        &ctx.db_conn.pool,
        repository::reset_token::CreateResetTokenPayload {
            id: token::digest(&raw_token),
            user_id: user.id.clone(),
            expires_at: (Utc::now() + Duration::minutes(auth::RESET_TOKEN_LIFETIME_MINUTES))
                .naive_utc(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToRequestReset)?;

    let reset_url = format!("{}/reset-password", ctx.app.url);
    notification::dispatch(
        ctx.clone(),
        Notification::password_reset_requested(&user, raw_token, reset_url),
    );

    Ok(response::Success::ResetRequested)
}
