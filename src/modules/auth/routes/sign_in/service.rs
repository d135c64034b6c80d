use super::types::{request, response};
use crate::{
    modules::{
        auth::{repository::session::Flash, service::auth},
        user,
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::SignInFailed)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        tracing::debug!("Rejected sign in attempt for user {}", user.id);
        return Err(response::Error::InvalidCredentials);
    }

    let opened = auth::create_session(
        &ctx.db_conn.pool,
        &user,
        Some(Flash::success(format!("Welcome back, {}!", user.name))),
    )
    .await
    .map_err(|_| response::Error::SignInFailed)?;

    Ok(response::Success::SignedIn((&user).into(), opened))
}
