use super::types::{request, response};
use crate::{
    modules::{
        auth::repository::session::{self, Flash},
        user::repository,
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    if !password::verify(&payload.body.current_password, &payload.auth.user.password_hash) {
        return Err(response::Error::IncorrectPassword);
    }

    let password_hash = password::hash(&payload.body.password)
        .map_err(|_| response::Error::FailedToChangePassword)?;

    repository::update_by_id(
        &ctx.db_conn.pool,
        &payload.auth.user.id,
        repository::UpdateUserPayload {
            password_hash: Some(password_hash),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToChangePassword)?;

    if let Err(err) = session::set_flash(
        &ctx.db_conn.pool,
        &payload.auth.session.id,
        Flash::success("Your password has been changed"),
    )
    .await
    {
        tracing::warn!("Failed to set the password change flash: {:?}", err);
    }

    Ok(response::Success::PasswordChanged)
}
