use super::types::{request, response};
use crate::{modules::review::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let review = repository::find_by_id(&ctx.db_conn.pool, &payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?
        .ok_or(response::Error::ReviewNotFound)?;

    if review.user_id != payload.auth.user.id {
        return Err(response::Error::NotReviewAuthor);
    }

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {:?}", err);
        response::Error::FailedToDeleteReview
    })?;

    repository::reaction::delete_by_review_id(&mut *tx, &review.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    repository::report::delete_by_review_id(&mut *tx, &review.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    repository::moderation::delete_by_review_id(&mut *tx, &review.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    repository::delete_by_id(&mut *tx, &review.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteReview)?;

    tx.commit()
        .await
        .map(|_| response::Success::ReviewDeleted)
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {:?}", err);
            response::Error::FailedToDeleteReview
        })
}
