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

    let stall = stall_service::find_owned(&ctx.db_conn.pool, &payload.stall_id, &payload.auth.user)
        .await
        .map_err(|err| match err {
            stall_service::Error::NotFound => response::Error::StallNotFound,
            stall_service::Error::NotOwner => response::Error::NotStallOwner,
            stall_service::Error::UnexpectedError => response::Error::FailedToCreateMenuItem,
        })?;

    repository::menu_item::create(
        &ctx.db_conn.pool,
        repository::menu_item::CreateMenuItemPayload {
            stall_id: stall.id,
            name: payload.body.name.trim().to_string(),
            description: payload.body.description,
            price_cents: payload.body.price_cents,
            is_available: payload.body.is_available.unwrap_or(true),
        },
    )
    .await
    .map(response::Success::MenuItemCreated)
    .map_err(|_| response::Error::FailedToCreateMenuItem)
}
