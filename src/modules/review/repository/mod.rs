pub mod moderation;
pub mod reaction;
pub mod report;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::{
    database::is_unique_violation,
    pagination::{Paginated, Pagination},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The user already reviewed this stall.
    Duplicate,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Review {
    pub id: String,
    pub stall_id: String,
    pub user_id: String,
    pub rating: i16,
    pub title: Option<String>,
    pub comment: String,
    pub is_hidden: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A visible review with its author and reaction tallies.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct ReviewListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub author_name: String,
    pub helpful_count: i64,
    pub not_helpful_count: i64,
}

pub struct CreateReviewPayload {
    pub stall_id: String,
    pub user_id: String,
    pub rating: i16,
    pub title: Option<String>,
    pub comment: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateReviewPayload) -> Result<Review> {
    sqlx::query_as::<_, Review>(
        "
        INSERT INTO reviews (id, stall_id, user_id, rating, title, comment)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.stall_id)
    .bind(payload.user_id)
    .bind(payload.rating)
    .bind(payload.title)
    .bind(payload.comment)
    .fetch_one(e)
    .await
    .map_err(|err| match is_unique_violation(&err) {
        true => Error::Duplicate,
        false => {
            tracing::error!("Error occurred while trying to create a review: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Review>> {
    sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch review {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn exists_by_stall_and_user<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
    user_id: &str,
) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM reviews WHERE stall_id = $1 AND user_id = $2)",
    )
    .bind(stall_id)
    .bind(user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while checking review of user {} on stall {}: {}",
            user_id,
            stall_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(sqlx::FromRow)]
struct CountedReviewListing {
    #[sqlx(flatten)]
    listing: ReviewListing,
    total: i64,
}

pub async fn find_many_visible_by_stall_id<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
    pagination: Pagination,
) -> Result<Paginated<ReviewListing>> {
    let rows = sqlx::query_as::<_, CountedReviewListing>(
        "
        SELECT
            reviews.*,
            users.name AS author_name,
            COUNT(review_reactions.id) FILTER (WHERE review_reactions.reaction = 'helpful') AS helpful_count,
            COUNT(review_reactions.id) FILTER (WHERE review_reactions.reaction = 'not_helpful') AS not_helpful_count,
            COUNT(*) OVER () AS total
        FROM reviews
        INNER JOIN users ON users.id = reviews.user_id
        LEFT JOIN review_reactions ON review_reactions.review_id = reviews.id
        WHERE reviews.stall_id = $1 AND NOT reviews.is_hidden
        GROUP BY reviews.id, users.name
        ORDER BY reviews.created_at DESC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(stall_id)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch reviews of stall {}: {}",
            stall_id,
            err
        );
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.listing).collect();

    Ok(Paginated::new(items, total, &pagination))
}

#[derive(Default)]
pub struct UpdateReviewPayload {
    pub rating: Option<i16>,
    pub title: Option<String>,
    pub comment: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    payload: UpdateReviewPayload,
) -> Result<Review> {
    sqlx::query_as::<_, Review>(
        "
        UPDATE reviews SET
            rating = COALESCE($1, rating),
            title = COALESCE($2, title),
            comment = COALESCE($3, comment),
            updated_at = NOW()
        WHERE
            id = $4
        RETURNING *
        ",
    )
    .bind(payload.rating)
    .bind(payload.title)
    .bind(payload.comment)
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update review {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn set_hidden<'e, E: PgExecutor<'e>>(e: E, id: &str, is_hidden: bool) -> Result<()> {
    sqlx::query("UPDATE reviews SET is_hidden = $1, updated_at = NOW() WHERE id = $2")
        .bind(is_hidden)
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while setting visibility of review {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete review {}: {}", id, err);
            Error::UnexpectedError
        })
}
