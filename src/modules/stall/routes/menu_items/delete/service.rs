use super::types::{request, response};
use crate::{
    modules::stall::{repository, service as stall_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let stall = stall_service::find_owned(&ctx.db_conn.pool, &payload.stall_id, &payload.auth.user)
        .await
        .map_err(|err| match err {
            stall_service::Error::NotFound => response::Error::StallNotFound,
            stall_service::Error::NotOwner => response::Error::NotStallOwner,
            stall_service::Error::UnexpectedError => response::Error::FailedToDeleteMenuItem,
        })?;

    let item = repository::menu_item::find_by_id(&ctx.db_conn.pool, &stall.id, &payload.item_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteMenuItem)?
        .ok_or(response::Error::MenuItemNotFound)?;

    repository::menu_item::delete_by_id(&ctx.db_conn.pool, &item.id)
        .await
        .map(|_| response::Success::MenuItemDeleted)
        .map_err(|_| response::Error::FailedToDeleteMenuItem)
}
