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
            stall_service::Error::UnexpectedError => response::Error::FailedToUpdateMenuItem,
        })?;

    let item = repository::menu_item::find_by_id(&ctx.db_conn.pool, &stall.id, &payload.item_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)?;

    repository::menu_item::update_by_id(
        &ctx.db_conn.pool,
        &item.id,
        repository::menu_item::UpdateMenuItemPayload {
            name: payload.body.name.map(|name| name.trim().to_string()),
            description: payload.body.description,
            price_cents: payload.body.price_cents,
            is_available: payload.body.is_available,
        },
    )
    .await
    .map(response::Success::MenuItemUpdated)
    .map_err(|_| response::Error::FailedToUpdateMenuItem)
}
