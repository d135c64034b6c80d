mod dashboard;
mod dismiss_report;
mod logs;
mod moderate;
mod reports;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(dashboard::get_router())
        .merge(logs::get_router())
        .merge(reports::get_router())
        .merge(dismiss_report::get_router())
        .merge(moderate::get_router())
}
