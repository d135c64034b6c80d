pub mod location;
pub mod menu_item;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::{
    modules::user::repository::User,
    utils::pagination::{Paginated, Pagination},
};

pub const STALL_CATEGORIES: [&str; 10] = [
    "Street Food",
    "Grilled",
    "Rice Meals",
    "Noodles",
    "Seafood",
    "Desserts",
    "Drinks",
    "Vegetarian",
    "Fusion",
    "Snacks",
];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StallStatus {
    Active,
    Closed,
}

impl ToString for StallStatus {
    fn to_string(&self) -> String {
        match self {
            Self::Active => String::from("active"),
            Self::Closed => String::from("closed"),
        }
    }
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Stall {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub contact_number: Option<String>,
    pub opening_hours: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Stall {
    pub fn is_active(&self) -> bool {
        self.status == StallStatus::Active.to_string()
    }
}

/// A stall together with the rating figures of its visible reviews.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct StallSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub stall: Stall,
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub struct CreateStallPayload {
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub contact_number: Option<String>,
    pub opening_hours: Option<String>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateStallPayload) -> Result<Stall> {
    sqlx::query_as::<_, Stall>(
        "
        INSERT INTO food_stalls (
            id,
            owner_id,
            name,
            description,
            categories,
            contact_number,
            opening_hours,
            status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.owner_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.categories)
    .bind(payload.contact_number)
    .bind(payload.opening_hours)
    .bind(StallStatus::Active.to_string())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a stall: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Stall>> {
    sqlx::query_as::<_, Stall>("SELECT * FROM food_stalls WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch stall {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Same as [`find_by_id`] but locks the row until the transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Stall>> {
    sqlx::query_as::<_, Stall>("SELECT * FROM food_stalls WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to lock stall {}: {}", id, err);
            Error::UnexpectedError
        })
}

const SUMMARY_COLUMNS: &str = "
    food_stalls.*,
    (
        SELECT AVG(reviews.rating)::FLOAT8
        FROM reviews
        WHERE reviews.stall_id = food_stalls.id AND NOT reviews.is_hidden
    ) AS average_rating,
    (
        SELECT COUNT(*)
        FROM reviews
        WHERE reviews.stall_id = food_stalls.id AND NOT reviews.is_hidden
    ) AS review_count
";

pub async fn find_summary_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
) -> Result<Option<StallSummary>> {
    sqlx::query_as::<_, StallSummary>(&format!(
        "SELECT {} FROM food_stalls WHERE id = $1",
        SUMMARY_COLUMNS
    ))
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch stall {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Default)]
pub struct FindManyFilters {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(sqlx::FromRow)]
struct CountedStallSummary {
    #[sqlx(flatten)]
    summary: StallSummary,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    filters: FindManyFilters,
) -> Result<Paginated<StallSummary>> {
    let rows = sqlx::query_as::<_, CountedStallSummary>(&format!(
        "
        SELECT {}, COUNT(*) OVER () AS total
        FROM food_stalls
        WHERE
            status = $1
            AND ($2::TEXT IS NULL OR name ILIKE CONCAT('%', $2, '%') OR description ILIKE CONCAT('%', $2, '%'))
            AND ($3::TEXT IS NULL OR $3 = ANY(categories))
        ORDER BY name ASC
        LIMIT $4 OFFSET $5
        ",
        SUMMARY_COLUMNS
    ))
    .bind(StallStatus::Active.to_string())
    .bind(filters.search)
    .bind(filters.category)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many stalls: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.into_iter().map(|row| row.summary).collect();

    Ok(Paginated::new(items, total, &pagination))
}

pub async fn find_many_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: &str,
) -> Result<Vec<StallSummary>> {
    sqlx::query_as::<_, StallSummary>(&format!(
        "SELECT {} FROM food_stalls WHERE owner_id = $1 ORDER BY created_at DESC",
        SUMMARY_COLUMNS
    ))
    .bind(owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch stalls of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Editable stall details. `None` leaves a column untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StallChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
}

impl StallChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    changes: StallChanges,
) -> Result<Stall> {
    sqlx::query_as::<_, Stall>(
        "
        UPDATE food_stalls SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            categories = COALESCE($3, categories),
            contact_number = COALESCE($4, contact_number),
            opening_hours = COALESCE($5, opening_hours),
            updated_at = NOW()
        WHERE
            id = $6
        RETURNING *
        ",
    )
    .bind(changes.name)
    .bind(changes.description)
    .bind(changes.categories)
    .bind(changes.contact_number)
    .bind(changes.opening_hours)
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update stall {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn set_status<'e, E: PgExecutor<'e>>(e: E, id: &str, status: StallStatus) -> Result<()> {
    sqlx::query("UPDATE food_stalls SET status = $1, updated_at = NOW() WHERE id = $2")
        .bind(status.to_string())
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to set status of stall {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn count_active<'e, E: PgExecutor<'e>>(e: E) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM food_stalls WHERE status = $1")
        .bind(StallStatus::Active.to_string())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting stalls: {}", err);
            Error::UnexpectedError
        })
}

pub fn is_owner(user: &User, stall: &Stall) -> bool {
    user.id == stall.owner_id
}

pub fn is_known_category(category: &str) -> bool {
    STALL_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_changes_are_detected() {
        assert!(StallChanges::default().is_empty());
        assert!(!StallChanges {
            opening_hours: Some(String::from("17:00-02:00")),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn changes_serialize_only_present_fields() {
        let changes = StallChanges {
            name: Some(String::from("Mang Tomas BBQ")),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            serde_json::json!({ "name": "Mang Tomas BBQ" })
        );
    }

    #[test]
    fn categories_are_matched_exactly() {
        assert!(is_known_category("Street Food"));
        assert!(!is_known_category("street food"));
    }
}
