use super::types::{request, response};
use crate::{modules::stall::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let stall = repository::find_summary_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchStall)?
        .filter(|summary| summary.stall.is_active())
        .ok_or(response::Error::StallNotFound)?;

    let location = repository::location::find_by_stall_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchStall)?;

    let menu_items = repository::menu_item::find_many_by_stall_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchStall)?;

    Ok(response::Success::Stall(response::StallDetails {
        stall,
        location,
        menu_items,
    }))
}
