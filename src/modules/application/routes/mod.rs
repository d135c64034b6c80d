mod approve;
mod archive;
mod decline;
mod get;
mod list;
mod mine;
mod submit;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(submit::get_router())
        .merge(mine::get_router())
        .merge(get::get_router())
        .merge(list::get_router())
        .merge(approve::get_router())
        .merge(decline::get_router())
        .merge(archive::get_router())
}
