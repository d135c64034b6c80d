use super::types::response;
use crate::{modules::review::repository::report, types::Context, utils::pagination::Pagination};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, pagination: Pagination) -> response::Response {
    report::find_many_unresolved(&ctx.db_conn.pool, pagination)
        .await
        .map(response::Success::Reports)
        .map_err(|_| response::Error::FailedToFetchReports)
}
