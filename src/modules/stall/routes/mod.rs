mod categories;
mod get;
mod list;
mod menu_items;
mod mine;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(categories::get_router())
        .merge(mine::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(menu_items::get_router())
}
