use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    if let Some(email) = &payload.body.email {
        let existing = repository::find_by_email(&ctx.db_conn.pool, email)
            .await
            .map_err(|_| response::Error::FailedToUpdateProfile)?;

        if existing.is_some_and(|user| user.id != payload.auth.user.id) {
            return Err(response::Error::EmailTaken);
        }
    }

    let user = repository::update_by_id(
        &ctx.db_conn.pool,
        &payload.auth.user.id,
        repository::UpdateUserPayload {
            name: payload.body.name.map(|name| name.trim().to_string()),
            email: payload.body.email,
            ..Default::default()
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::Duplicate => response::Error::EmailTaken,
        repository::Error::UnexpectedError => response::Error::FailedToUpdateProfile,
    })?;

    Ok(response::Success::ProfileUpdated((&user).into()))
}
