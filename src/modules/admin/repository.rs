use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct AdminLog {
    pub id: String,
    pub admin_id: String,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreateAdminLogPayload {
    pub admin_id: String,
    pub action: &'static str,
    pub target_type: &'static str,
    pub target_id: String,
    pub details: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateAdminLogPayload) -> Result<()> {
    sqlx::query(
        "
        INSERT INTO admin_logs (id, admin_id, action, target_type, target_id, details)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.admin_id)
    .bind(payload.action)
    .bind(payload.target_type)
    .bind(&payload.target_id)
    .bind(payload.details)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while logging admin action '{}' on {} {}: {}",
            payload.action,
            payload.target_type,
            payload.target_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn exists_by_admin_id<'e, E: PgExecutor<'e>>(e: E, admin_id: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM admin_logs WHERE admin_id = $1)")
        .bind(admin_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while checking admin logs of {}: {}",
                admin_id,
                err
            );
            Error::UnexpectedError
        })
}

#[derive(sqlx::FromRow)]
struct CountedAdminLog {
    #[sqlx(flatten)]
    log: AdminLog,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<AdminLog>> {
    let rows = sqlx::query_as::<_, CountedAdminLog>(
        "
        SELECT admin_logs.*, COUNT(*) OVER () AS total
        FROM admin_logs
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch admin logs: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.log).collect();

    Ok(Paginated::new(items, total, &pagination))
}
