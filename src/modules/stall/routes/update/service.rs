use super::types::{request, response};
use crate::{
    modules::stall::{repository, service as stall_service},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let stall = stall_service::find_owned(&ctx.db_conn.pool, &payload.id, &payload.auth.user)
        .await
        .map_err(|err| match err {
            stall_service::Error::NotFound => response::Error::StallNotFound,
            stall_service::Error::NotOwner => response::Error::NotStallOwner,
            stall_service::Error::UnexpectedError => response::Error::FailedToUpdateStall,
        })?;

    let stall = repository::update_by_id(
        &ctx.db_conn.pool,
        &stall.id,
        repository::StallChanges {
            contact_number: payload.body.contact_number,
            opening_hours: payload.body.opening_hours,
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateStall)?;

    Ok(response::Success::StallUpdated(stall))
}
