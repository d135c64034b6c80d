mod confirm;
mod request;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(request::get_router())
        .merge(confirm::get_router())
}
