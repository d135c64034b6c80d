use super::types::{request, response};
use crate::{
    modules::{
        review::repository,
        stall::{self, service as stall_service},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    let stall = stall_service::find_active(&ctx.db_conn.pool, &payload.stall_id)
        .await
        .map_err(|err| match err {
            stall_service::Error::UnexpectedError => response::Error::FailedToCreateReview,
            _ => response::Error::StallNotFound,
        })?;

    if stall::repository::is_owner(&payload.auth.user, &stall) {
        return Err(response::Error::OwnStall);
    }

    let already_reviewed = repository::exists_by_stall_and_user(
        &ctx.db_conn.pool,
        &stall.id,
        &payload.auth.user.id,
    )
    .await
    .map_err(|_| response::Error::FailedToCreateReview)?;

    if already_reviewed {
        return Err(response::Error::AlreadyReviewed);
    }

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateReviewPayload {
            stall_id: stall.id,
            user_id: payload.auth.user.id,
            rating: payload.body.rating,
            title: payload.body.title.map(|title| title.trim().to_string()),
            comment: payload.body.comment.trim().to_string(),
        },
    )
    .await
    .map(response::Success::ReviewCreated)
    .map_err(|err| match err {
        repository::Error::Duplicate => response::Error::AlreadyReviewed,
        repository::Error::UnexpectedError => response::Error::FailedToCreateReview,
    })
}
