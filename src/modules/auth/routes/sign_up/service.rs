use super::types::{request, response};
use crate::{
    modules::{
        auth::{repository::session::Flash, service::auth},
        user::{self, repository::UserType},
    },
    types::Context,
    utils::password,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate sign up payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let existing_user = user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::SignUpFailed)?;

    if existing_user.is_some() {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::SignUpFailed)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::SignUpFailed
    })?;

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            name: payload.name.trim().to_string(),
            email: payload.email,
            password_hash,
            user_type: UserType::FoodEnthusiast,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::Duplicate => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::SignUpFailed,
    })?;

    let opened = auth::create_session(
        &mut *tx,
        &user,
        Some(Flash::success("Welcome to BuzzarFeed!")),
    )
    .await
    .map_err(|_| response::Error::SignUpFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::SignUpFailed
    })?;

    tracing::info!("User {} signed up", user.id);

    Ok(response::Success::SignedUp((&user).into(), opened))
}
