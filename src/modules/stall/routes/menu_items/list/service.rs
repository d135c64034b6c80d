use super::types::{request, response};
use crate::{
    modules::stall::{repository, service as stall_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    stall_service::find_active(&ctx.db_conn.pool, &payload.stall_id)
        .await
        .map_err(|err| match err {
            stall_service::Error::UnexpectedError => response::Error::FailedToFetchMenuItems,
            _ => response::Error::StallNotFound,
        })?;

    repository::menu_item::find_many_by_stall_id(&ctx.db_conn.pool, &payload.stall_id)
        .await
        .map(response::Success::MenuItems)
        .map_err(|_| response::Error::FailedToFetchMenuItems)
}
