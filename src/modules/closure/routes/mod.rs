mod approve;
mod decline;
mod list;
mod request;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(request::get_router())
        .merge(list::get_router())
        .merge(approve::get_router())
        .merge(decline::get_router())
}
