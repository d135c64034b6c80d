use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let review = repository::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToReportReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    let report = repository::report::create(
        &ctx.db_conn.pool,
        repository::report::CreateReportPayload {
            review_id: review.id,
            reporter_id: payload.auth.user.id,
            reason: payload.body.reason.trim().to_string(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToReportReview)?;

    tracing::info!("Review {} reported ({})", report.review_id, report.id);

    Ok(response::Success::ReviewReported(report))
}
