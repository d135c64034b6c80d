mod delete;
mod get;
mod password;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(password::get_router())
}
