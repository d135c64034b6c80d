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
        .map_err(|_| response::Error::FailedToUpdateReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if review.user_id != payload.auth.user.id {
        return Err(response::Error::NotReviewAuthor);
    }

    repository::update_by_id(
        &ctx.db_conn.pool,
        &review.id,
        repository::UpdateReviewPayload {
            rating: payload.body.rating,
            title: payload.body.title.map(|title| title.trim().to_string()),
            comment: payload.body.comment.map(|comment| comment.trim().to_string()),
        },
    )
    .await
    .map(response::Success::ReviewUpdated)
    .map_err(|_| response::Error::FailedToUpdateReview)
}
