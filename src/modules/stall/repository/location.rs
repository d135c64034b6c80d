use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use super::Error;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Location {
    pub id: String,
    pub stall_id: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: NaiveDateTime,
}

pub struct CreateLocationPayload {
    pub stall_id: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateLocationPayload,
) -> Result<Location, Error> {
    sqlx::query_as::<_, Location>(
        "
        INSERT INTO stall_locations (id, stall_id, address, latitude, longitude)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.stall_id)
    .bind(payload.address)
    .bind(payload.latitude)
    .bind(payload.longitude)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a stall location: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_stall_id<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
) -> Result<Option<Location>, Error> {
    sqlx::query_as::<_, Location>(
        "SELECT * FROM stall_locations WHERE stall_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(stall_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch location of stall {}: {}",
            stall_id,
            err
        );
        Error::UnexpectedError
    })
}
