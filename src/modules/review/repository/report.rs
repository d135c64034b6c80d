use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use super::Error;
use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Report {
    pub id: String,
    pub review_id: String,
    pub reporter_id: String,
    pub reason: String,
    pub is_resolved: bool,
    pub created_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

/// An unresolved report along with the review it points at.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct OpenReport {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub report: Report,
    pub stall_id: String,
    pub review_rating: i16,
    pub review_comment: String,
    pub review_is_hidden: bool,
}

pub struct CreateReportPayload {
    pub review_id: String,
    pub reporter_id: String,
    pub reason: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateReportPayload) -> Result<Report> {
    sqlx::query_as::<_, Report>(
        "
        INSERT INTO review_reports (id, review_id, reporter_id, reason)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.review_id)
    .bind(payload.reporter_id)
    .bind(payload.reason)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to report a review: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Report>> {
    sqlx::query_as::<_, Report>("SELECT * FROM review_reports WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch report {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[derive(sqlx::FromRow)]
struct CountedOpenReport {
    #[sqlx(flatten)]
    report: OpenReport,
    total: i64,
}

pub async fn find_many_unresolved<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<OpenReport>> {
    let rows = sqlx::query_as::<_, CountedOpenReport>(
        "
        SELECT
            review_reports.*,
            reviews.stall_id,
            reviews.rating AS review_rating,
            reviews.comment AS review_comment,
            reviews.is_hidden AS review_is_hidden,
            COUNT(*) OVER () AS total
        FROM review_reports
        INNER JOIN reviews ON reviews.id = review_reports.review_id
        WHERE NOT review_reports.is_resolved
        ORDER BY review_reports.created_at ASC
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch open reports: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.report).collect();

    Ok(Paginated::new(items, total, &pagination))
}

pub async fn resolve_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("UPDATE review_reports SET is_resolved = TRUE, resolved_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while resolving report {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn resolve_by_review_id<'e, E: PgExecutor<'e>>(e: E, review_id: &str) -> Result<u64> {
    sqlx::query(
        "
        UPDATE review_reports SET is_resolved = TRUE, resolved_at = NOW()
        WHERE review_id = $1 AND NOT is_resolved
        ",
    )
    .bind(review_id)
    .execute(e)
    .await
    .map(|res| res.rows_affected())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while resolving reports of review {}: {}",
            review_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_review_id<'e, E: PgExecutor<'e>>(e: E, review_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM review_reports WHERE review_id = $1")
        .bind(review_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while removing reports of review {}: {}",
                review_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn count_unresolved<'e, E: PgExecutor<'e>>(e: E) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM review_reports WHERE NOT is_resolved")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting open reports: {}", err);
            Error::UnexpectedError
        })
}
