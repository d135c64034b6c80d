use chrono::NaiveDateTime;
use sqlx::PgExecutor;

#[derive(sqlx::FromRow, Clone, Debug)]
pub struct ResetToken {
    pub id: String,
    pub user_id: String,
    pub expires_at: NaiveDateTime,
    pub used_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub struct CreateResetTokenPayload {
    pub id: String,
    pub user_id: String,
    pub expires_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateResetTokenPayload) -> Result<()> {
    sqlx::query("INSERT INTO reset_tokens (id, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(payload.id)
        .bind(payload.user_id)
        .bind(payload.expires_at)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while creating a reset token: {}", err);
            Error::UnexpectedError
        })
}

/// Only unused, unexpired tokens are returned. The row is locked for the
/// rest of the surrounding transaction.
pub async fn find_usable_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<ResetToken>> {
    sqlx::query_as::<_, ResetToken>(
        "
        SELECT * FROM reset_tokens
        WHERE id = $1 AND used_at IS NULL AND expires_at > NOW()
        FOR UPDATE
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching a reset token: {}", err);
        Error::UnexpectedError
    })
}

pub async fn mark_as_used<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("UPDATE reset_tokens SET used_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while marking a reset token as used: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_stale<'e, E: PgExecutor<'e>>(e: E) -> Result<u64> {
    sqlx::query("DELETE FROM reset_tokens WHERE used_at IS NOT NULL OR expires_at < NOW()")
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!("Error occurred while purging reset tokens: {}", err);
            Error::UnexpectedError
        })
}
