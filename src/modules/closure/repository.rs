use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::{
    modules::application::repository::status::{self, ApprovalStatus},
    utils::{
        database::is_unique_violation,
        pagination::{Paginated, Pagination},
    },
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The stall already has a pending closure request.
    Duplicate,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Closure {
    pub id: String,
    pub stall_id: String,
    pub requester_id: String,
    pub reason: String,
    #[serde(rename = "status", serialize_with = "status::serialize_id")]
    pub current_status_id: i16,
    pub reviewer_id: Option<String>,
    pub decline_reason: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Closure {
    pub fn status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_id(self.current_status_id)
    }
}

pub struct CreateClosurePayload {
    pub stall_id: String,
    pub requester_id: String,
    pub reason: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateClosurePayload) -> Result<Closure> {
    sqlx::query_as::<_, Closure>(
        "
        INSERT INTO stall_closures (id, stall_id, requester_id, reason, current_status_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.stall_id)
    .bind(payload.requester_id)
    .bind(payload.reason)
    .bind(ApprovalStatus::Pending.id())
    .fetch_one(e)
    .await
    .map_err(|err| match is_unique_violation(&err) {
        true => Error::Duplicate,
        false => {
            tracing::error!("Error occurred while trying to create a closure request: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Closure>> {
    sqlx::query_as::<_, Closure>("SELECT * FROM stall_closures WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to lock closure request {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn has_pending_by_stall_id<'e, E: PgExecutor<'e>>(e: E, stall_id: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM stall_closures WHERE stall_id = $1 AND current_status_id = $2)",
    )
    .bind(stall_id)
    .bind(ApprovalStatus::Pending.id())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while checking pending closures of stall {}: {}",
            stall_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(sqlx::FromRow)]
struct CountedClosure {
    #[sqlx(flatten)]
    closure: Closure,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    status: Option<ApprovalStatus>,
) -> Result<Paginated<Closure>> {
    let rows = sqlx::query_as::<_, CountedClosure>(
        "
        SELECT stall_closures.*, COUNT(*) OVER () AS total
        FROM stall_closures
        WHERE $1::SMALLINT IS NULL OR current_status_id = $1
        ORDER BY created_at ASC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(status.map(|status| status.id()))
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many closure requests: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.closure).collect();

    Ok(Paginated::new(items, total, &pagination))
}

pub struct ReviewClosurePayload {
    pub status: ApprovalStatus,
    pub reviewer_id: String,
    pub decline_reason: Option<String>,
}

pub async fn review_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    payload: ReviewClosurePayload,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE stall_closures SET
            current_status_id = $1,
            reviewer_id = $2,
            decline_reason = $3,
            updated_at = NOW()
        WHERE
            id = $4
        ",
    )
    .bind(payload.status.id())
    .bind(payload.reviewer_id)
    .bind(payload.decline_reason)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while reviewing closure request {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn count_by_status<'e, E: PgExecutor<'e>>(e: E, status: ApprovalStatus) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stall_closures WHERE current_status_id = $1")
        .bind(status.id())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting closure requests: {}", err);
            Error::UnexpectedError
        })
}
