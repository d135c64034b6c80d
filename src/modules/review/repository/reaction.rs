use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use super::Error;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Helpful,
    NotHelpful,
}

impl ToString for Reaction {
    fn to_string(&self) -> String {
        match self {
            Self::Helpful => String::from("helpful"),
            Self::NotHelpful => String::from("not_helpful"),
        }
    }
}

/// Inserts the user's reaction or replaces the one they already left.
pub async fn upsert<'e, E: PgExecutor<'e>>(
    e: E,
    review_id: &str,
    user_id: &str,
    reaction: Reaction,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO review_reactions (id, review_id, user_id, reaction)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (review_id, user_id) DO UPDATE SET reaction = EXCLUDED.reaction
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(review_id)
    .bind(user_id)
    .bind(reaction.to_string())
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while saving reaction of user {} on review {}: {}",
            user_id,
            review_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete<'e, E: PgExecutor<'e>>(
    e: E,
    review_id: &str,
    user_id: &str,
) -> Result<u64, Error> {
    sqlx::query("DELETE FROM review_reactions WHERE review_id = $1 AND user_id = $2")
        .bind(review_id)
        .bind(user_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while removing reaction of user {} on review {}: {}",
                user_id,
                review_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_by_review_id<'e, E: PgExecutor<'e>>(e: E, review_id: &str) -> Result<(), Error> {
    sqlx::query("DELETE FROM review_reactions WHERE review_id = $1")
        .bind(review_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while removing reactions of review {}: {}",
                review_id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactions_use_snake_case_names() {
        let reaction: Reaction = serde_json::from_str("\"not_helpful\"").unwrap();
        assert_eq!(reaction, Reaction::NotHelpful);
        assert_eq!(reaction.to_string(), "not_helpful");
        assert!(serde_json::from_str::<Reaction>("\"love\"").is_err());
    }
}
