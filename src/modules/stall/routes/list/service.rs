use super::types::{request, response};
use crate::{modules::stall::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let filters = repository::FindManyFilters {
        search: payload
            .filters
            .search
            .map(|search| search.trim().to_string())
            .filter(|search| !search.is_empty()),
        category: payload.filters.category.filter(|category| !category.is_empty()),
    };

    repository::find_many(&ctx.db_conn.pool, payload.pagination, filters)
        .await
        .map(response::Success::Stalls)
        .map_err(|_| response::Error::FailedToFetchStalls)
}
