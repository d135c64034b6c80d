pub mod review;
pub mod status;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{types::Json, PgExecutor};
use ulid::Ulid;

use crate::{
    modules::storage::StoredDocument,
    utils::{
        database::is_unique_violation,
        pagination::{Paginated, Pagination},
    },
};
use status::ApprovalStatus;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The user already has a pending application.
    Duplicate,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub stall_name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub documents: Json<Vec<StoredDocument>>,
    #[serde(rename = "status", serialize_with = "status::serialize_id")]
    pub current_status_id: i16,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Application {
    pub fn status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_id(self.current_status_id)
    }
}

pub struct CreateApplicationPayload {
    pub user_id: String,
    pub stall_name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub documents: Vec<StoredDocument>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateApplicationPayload,
) -> Result<Application> {
    sqlx::query_as::<_, Application>(
        "
        INSERT INTO applications (
            id,
            user_id,
            stall_name,
            description,
            categories,
            contact_number,
            address,
            latitude,
            longitude,
            documents,
            current_status_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.stall_name)
    .bind(payload.description)
    .bind(payload.categories)
    .bind(payload.contact_number)
    .bind(payload.address)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .bind(Json(payload.documents))
    .bind(ApprovalStatus::Pending.id())
    .fetch_one(e)
    .await
    .map_err(|err| match is_unique_violation(&err) {
        true => Error::Duplicate,
        false => {
            tracing::error!("Error occurred while trying to create an application: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Application>> {
    sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch application {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Locks the application row until the surrounding transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
) -> Result<Option<Application>> {
    sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to lock application {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: &str,
) -> Result<Vec<Application>> {
    sqlx::query_as::<_, Application>(
        "SELECT * FROM applications WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch applications of user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(sqlx::FromRow)]
struct CountedApplication {
    #[sqlx(flatten)]
    application: Application,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    status: Option<ApprovalStatus>,
) -> Result<Paginated<Application>> {
    let rows = sqlx::query_as::<_, CountedApplication>(
        "
        SELECT applications.*, COUNT(*) OVER () AS total
        FROM applications
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
        tracing::error!("Error occurred while trying to fetch many applications: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.application).collect();

    Ok(Paginated::new(items, total, &pagination))
}

pub async fn has_pending_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM applications WHERE user_id = $1 AND current_status_id = $2)",
    )
    .bind(user_id)
    .bind(ApprovalStatus::Pending.id())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while checking pending applications of user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn set_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    status: ApprovalStatus,
) -> Result<()> {
    sqlx::query("UPDATE applications SET current_status_id = $1, updated_at = NOW() WHERE id = $2")
        .bind(status.id())
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while setting status of application {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting application {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn count_by_status<'e, E: PgExecutor<'e>>(e: E, status: ApprovalStatus) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE current_status_id = $1")
        .bind(status.id())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting applications: {}", err);
            Error::UnexpectedError
        })
}
