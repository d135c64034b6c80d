use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use super::Error;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Hide,
    Restore,
}

impl ModerationAction {
    pub fn hides(&self) -> bool {
        *self == Self::Hide
    }
}

impl ToString for ModerationAction {
    fn to_string(&self) -> String {
        match self {
            Self::Hide => String::from("hide"),
            Self::Restore => String::from("restore"),
        }
    }
}

pub struct CreateModerationPayload {
    pub review_id: String,
    pub moderator_id: String,
    pub action: ModerationAction,
    pub reason: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateModerationPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO review_moderations (id, review_id, moderator_id, action, reason)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.review_id)
    .bind(payload.moderator_id)
    .bind(payload.action.to_string())
    .bind(payload.reason)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while recording moderation of review {}: {}",
            payload.review_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_review_id<'e, E: PgExecutor<'e>>(e: E, review_id: &str) -> Result<(), Error> {
    sqlx::query("DELETE FROM review_moderations WHERE review_id = $1")
        .bind(review_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while removing moderations of review {}: {}",
                review_id,
                err
            );
            Error::UnexpectedError
        })
}
