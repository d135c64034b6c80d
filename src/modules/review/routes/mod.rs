mod create;
mod delete;
mod list;
mod react;
mod report;
mod unreact;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .merge(react::get_router())
        .merge(unreact::get_router())
        .merge(report::get_router())
}
