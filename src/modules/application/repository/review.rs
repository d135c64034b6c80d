use sqlx::PgExecutor;
use ulid::Ulid;

use super::{status::ApprovalStatus, Error};

pub struct CreateApplicationReviewPayload {
    pub application_id: String,
    pub reviewer_id: String,
    pub status: ApprovalStatus,
    pub notes: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateApplicationReviewPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO application_reviews (id, application_id, reviewer_id, status_id, notes)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.application_id)
    .bind(payload.reviewer_id)
    .bind(payload.status.id())
    .bind(payload.notes)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while recording a review of application {}: {}",
            payload.application_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_application_id<'e, E: PgExecutor<'e>>(
    e: E,
    application_id: &str,
) -> Result<u64, Error> {
    sqlx::query("DELETE FROM application_reviews WHERE application_id = $1")
        .bind(application_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting reviews of application {}: {}",
                application_id,
                err
            );
            Error::UnexpectedError
        })
}
