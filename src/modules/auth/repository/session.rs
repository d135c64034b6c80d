use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Error,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }
}

#[derive(sqlx::FromRow, Clone, Debug)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub user_type_id: i16,
    pub csrf_token: String,
    pub flash: Option<Json<Flash>>,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub struct CreateSessionPayload {
    pub id: String,
    pub user_id: String,
    pub user_type_id: i16,
    pub csrf_token: String,
    pub flash: Option<Flash>,
    pub expires_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateSessionPayload) -> Result<Session> {
    sqlx::query_as::<_, Session>(
        "
        INSERT INTO session_tokens (id, user_id, user_type_id, csrf_token, flash, expires_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(payload.id)
    .bind(payload.user_id)
    .bind(payload.user_type_id)
    .bind(payload.csrf_token)
    .bind(payload.flash.map(Json))
    .bind(payload.expires_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a session: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Session>> {
    sqlx::query_as::<_, Session>("SELECT * FROM session_tokens WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching a session: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM session_tokens WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting a session: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: &str) -> Result<u64> {
    sqlx::query("DELETE FROM session_tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting sessions of user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_user_type_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: &str,
    user_type_id: i16,
) -> Result<()> {
    sqlx::query("UPDATE session_tokens SET user_type_id = $2 WHERE user_id = $1")
        .bind(user_id)
        .bind(user_type_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while updating session user types: {}", err);
            Error::UnexpectedError
        })
}

pub async fn set_flash<'e, E: PgExecutor<'e>>(e: E, id: &str, flash: Flash) -> Result<()> {
    sqlx::query("UPDATE session_tokens SET flash = $2 WHERE id = $1")
        .bind(id)
        .bind(Json(flash))
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while setting a flash message: {}", err);
            Error::UnexpectedError
        })
}

/// Reads and clears the flash message in a single statement.
pub async fn take_flash<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Flash>> {
    sqlx::query_scalar::<_, Option<Json<Flash>>>(
        "
        UPDATE session_tokens AS current
        SET flash = NULL
        FROM session_tokens AS previous
        WHERE current.id = $1 AND previous.id = current.id
        RETURNING previous.flash
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map(|flash| flash.flatten().map(|Json(flash)| flash))
    .map_err(|err| {
        tracing::error!("Error occurred while consuming a flash message: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_expired<'e, E: PgExecutor<'e>>(e: E) -> Result<u64> {
    sqlx::query("DELETE FROM session_tokens WHERE expires_at < NOW()")
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while purging expired sessions: {}", err);
            Error::UnexpectedError
        })
}
