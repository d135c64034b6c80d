use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

use super::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct MenuItem {
    pub id: String,
    pub stall_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateMenuItemPayload {
    pub stall_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub is_available: bool,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMenuItemPayload) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (id, stall_id, name, description, price_cents, is_available)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.stall_id)
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price_cents)
    .bind(payload.is_available)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
    id: &str,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1 AND stall_id = $2")
        .bind(id)
        .bind(stall_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch menu item {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_stall_id<'e, E: PgExecutor<'e>>(
    e: E,
    stall_id: &str,
) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "SELECT * FROM menu_items WHERE stall_id = $1 ORDER BY name ASC",
    )
    .bind(stall_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menu items of stall {}: {}",
            stall_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i32>,
    pub is_available: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    payload: UpdateMenuItemPayload,
) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price_cents = COALESCE($3, price_cents),
            is_available = COALESCE($4, is_available),
            updated_at = NOW()
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price_cents)
    .bind(payload.is_available)
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update menu item {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete menu item {}: {}", id, err);
            Error::UnexpectedError
        })
}
