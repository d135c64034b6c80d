use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Postgres, Transaction};
use ulid::Ulid;

use crate::utils::{
    database::is_unique_violation,
    pagination::{Paginated, Pagination},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    FoodEnthusiast,
    StallOwner,
    Admin,
}

impl UserType {
    pub fn id(&self) -> i16 {
        match self {
            Self::FoodEnthusiast => 1,
            Self::StallOwner => 2,
            Self::Admin => 3,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::FoodEnthusiast),
            2 => Some(Self::StallOwner),
            3 => Some(Self::Admin),
            _ => None,
        }
    }
}

impl ToString for UserType {
    fn to_string(&self) -> String {
        match self {
            Self::FoodEnthusiast => String::from("food_enthusiast"),
            Self::StallOwner => String::from("stall_owner"),
            Self::Admin => String::from("admin"),
        }
    }
}

#[derive(sqlx::FromRow, Clone, Debug)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type_id: i16,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn user_type(&self) -> Option<UserType> {
        UserType::from_id(self.user_type_id)
    }
}

/// Public view of a user, without credentials.
#[derive(Serialize, Clone, Debug)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: Option<UserType>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            user_type: user.user_type(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    /// The email address belongs to another account.
    Duplicate,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, name, email, password_hash, user_type_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email.to_lowercase())
    .bind(payload.password_hash)
    .bind(payload.user_type.id())
    .fetch_one(e)
    .await
    .map_err(|err| match is_unique_violation(&err) {
        true => Error::Duplicate,
        false => {
            tracing::error!("Error occured while creating a user account: {}", err);
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email.to_lowercase())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

#[derive(Default)]
pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    payload: UpdateUserPayload,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            name = COALESCE($1, name),
            email = COALESCE($2, email),
            password_hash = COALESCE($3, password_hash),
            updated_at = NOW()
        WHERE
            id = $4
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.email.map(|email| email.to_lowercase()))
    .bind(payload.password_hash)
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| match is_unique_violation(&err) {
        true => Error::Duplicate,
        false => {
            tracing::error!(
                "Error occurred while trying to update a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        }
    })
}

/// Food enthusiasts become stall owners; other types are left alone.
/// `updated_at` is bumped either way.
pub async fn promote_to_stall_owner<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            user_type_id = CASE WHEN user_type_id = $2 THEN $3 ELSE user_type_id END,
            updated_at = NOW()
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(UserType::FoodEnthusiast.id())
    .bind(UserType::StallOwner.id())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while promoting user {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Default)]
pub struct FindManyFilters {
    pub search: Option<String>,
    pub user_type: Option<UserType>,
}

#[derive(sqlx::FromRow)]
struct CountedUser {
    #[sqlx(flatten)]
    user: User,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    filters: FindManyFilters,
) -> Result<Paginated<Profile>> {
    let rows = sqlx::query_as::<_, CountedUser>(
        "
        SELECT users.*, COUNT(*) OVER () AS total
        FROM users
        WHERE
            ($1::TEXT IS NULL OR name ILIKE CONCAT('%', $1, '%') OR email ILIKE CONCAT('%', $1, '%'))
            AND ($2::SMALLINT IS NULL OR user_type_id = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        ",
    )
    .bind(filters.search)
    .bind(filters.user_type.map(|user_type| user_type.id()))
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many users: {}", err);
        Error::UnexpectedError
    })?;

    let total = rows.first().map(|row| row.total as u32).unwrap_or(0);
    let items = rows.iter().map(|row| Profile::from(&row.user)).collect();

    Ok(Paginated::new(items, total, &pagination))
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting users: {}", err);
            Error::UnexpectedError
        })
}

/// Rows referencing a user, removed child-first. Every statement binds the
/// user id as `$1`; the final step removes the user row itself.
pub const ACCOUNT_DELETION_STEPS: &[(&str, &str)] = &[
    (
        "reactions by user",
        "DELETE FROM review_reactions WHERE user_id = $1",
    ),
    (
        "reports by user",
        "DELETE FROM review_reports WHERE reporter_id = $1",
    ),
    (
        "moderations by user",
        "DELETE FROM review_moderations WHERE moderator_id = $1",
    ),
    (
        "reactions on user reviews",
        "DELETE FROM review_reactions WHERE review_id IN (SELECT id FROM reviews WHERE user_id = $1)",
    ),
    (
        "reports on user reviews",
        "DELETE FROM review_reports WHERE review_id IN (SELECT id FROM reviews WHERE user_id = $1)",
    ),
    (
        "moderations on user reviews",
        "DELETE FROM review_moderations WHERE review_id IN (SELECT id FROM reviews WHERE user_id = $1)",
    ),
    ("user reviews", "DELETE FROM reviews WHERE user_id = $1"),
    (
        "reactions on owned stall reviews",
        "DELETE FROM review_reactions WHERE review_id IN (
            SELECT reviews.id FROM reviews JOIN food_stalls ON food_stalls.id = reviews.stall_id
            WHERE food_stalls.owner_id = $1
        )",
    ),
    (
        "reports on owned stall reviews",
        "DELETE FROM review_reports WHERE review_id IN (
            SELECT reviews.id FROM reviews JOIN food_stalls ON food_stalls.id = reviews.stall_id
            WHERE food_stalls.owner_id = $1
        )",
    ),
    (
        "moderations on owned stall reviews",
        "DELETE FROM review_moderations WHERE review_id IN (
            SELECT reviews.id FROM reviews JOIN food_stalls ON food_stalls.id = reviews.stall_id
            WHERE food_stalls.owner_id = $1
        )",
    ),
    (
        "owned stall reviews",
        "DELETE FROM reviews WHERE stall_id IN (SELECT id FROM food_stalls WHERE owner_id = $1)",
    ),
    (
        "owned stall menu items",
        "DELETE FROM menu_items WHERE stall_id IN (SELECT id FROM food_stalls WHERE owner_id = $1)",
    ),
    (
        "owned stall locations",
        "DELETE FROM stall_locations WHERE stall_id IN (SELECT id FROM food_stalls WHERE owner_id = $1)",
    ),
    (
        "amendments",
        "DELETE FROM stall_amendments
         WHERE requester_id = $1 OR stall_id IN (SELECT id FROM food_stalls WHERE owner_id = $1)",
    ),
    (
        "amendments reviewed by user",
        "UPDATE stall_amendments SET reviewer_id = NULL WHERE reviewer_id = $1",
    ),
    (
        "closures",
        "DELETE FROM stall_closures
         WHERE requester_id = $1 OR stall_id IN (SELECT id FROM food_stalls WHERE owner_id = $1)",
    ),
    (
        "closures reviewed by user",
        "UPDATE stall_closures SET reviewer_id = NULL WHERE reviewer_id = $1",
    ),
    ("owned stalls", "DELETE FROM food_stalls WHERE owner_id = $1"),
    (
        "application reviews",
        "DELETE FROM application_reviews
         WHERE reviewer_id = $1 OR application_id IN (SELECT id FROM applications WHERE user_id = $1)",
    ),
    ("applications", "DELETE FROM applications WHERE user_id = $1"),
    ("session tokens", "DELETE FROM session_tokens WHERE user_id = $1"),
    ("reset tokens", "DELETE FROM reset_tokens WHERE user_id = $1"),
    ("user", "DELETE FROM users WHERE id = $1"),
];

/// Runs every account deletion step inside the caller's transaction. The
/// caller decides whether to commit.
pub async fn delete_account(tx: &mut Transaction<'_, Postgres>, id: &str) -> Result<()> {
    for (step, statement) in ACCOUNT_DELETION_STEPS {
        let res = sqlx::query(statement)
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Account deletion of user {} failed at step '{}': {}",
                    id,
                    step,
                    err
                );
                Error::UnexpectedError
            })?;

        tracing::debug!(
            "Account deletion of user {}: removed {} row(s) at step '{}'",
            id,
            res.rows_affected(),
            step
        );
    }

    Ok(())
}

pub fn is_admin(user: &User) -> bool {
    user.user_type() == Some(UserType::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(label: &str) -> usize {
        ACCOUNT_DELETION_STEPS
            .iter()
            .position(|(step, _)| *step == label)
            .unwrap_or_else(|| panic!("missing step {}", label))
    }

    #[test]
    fn user_row_is_deleted_last() {
        let (step, statement) = ACCOUNT_DELETION_STEPS.last().unwrap();
        assert_eq!(*step, "user");
        assert_eq!(*statement, "DELETE FROM users WHERE id = $1");
    }

    #[test]
    fn review_children_go_before_reviews() {
        assert!(position("reactions on user reviews") < position("user reviews"));
        assert!(position("reports on user reviews") < position("user reviews"));
        assert!(position("moderations on user reviews") < position("user reviews"));
        assert!(position("reactions on owned stall reviews") < position("owned stall reviews"));
    }

    #[test]
    fn stall_children_go_before_stalls() {
        let stalls = position("owned stalls");
        for child in [
            "owned stall reviews",
            "owned stall menu items",
            "owned stall locations",
            "amendments",
            "closures",
        ] {
            assert!(position(child) < stalls, "{} must precede owned stalls", child);
        }
    }

    #[test]
    fn application_reviews_go_before_applications() {
        assert!(position("application reviews") < position("applications"));
    }

    #[test]
    fn every_step_binds_the_user_id() {
        for (step, statement) in ACCOUNT_DELETION_STEPS {
            assert!(statement.contains("$1"), "{} does not bind the user id", step);
            assert!(!statement.contains("$2"), "{} binds more than the user id", step);
        }
    }

    #[test]
    fn user_type_ids_round_trip() {
        for user_type in [UserType::FoodEnthusiast, UserType::StallOwner, UserType::Admin] {
            assert_eq!(UserType::from_id(user_type.id()), Some(user_type));
        }
        assert_eq!(UserType::from_id(9), None);
    }
}
