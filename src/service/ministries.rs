//! Ministry queries.

use crate::error::AppError;
use crate::models::{Ministry, NewMinistry};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

const MINISTRY_COLUMNS: &str =
    "id, name, description, leader, contact_email, created_at, updated_at";

pub async fn list(pool: &PgPool, limit: u32, offset: u32) -> Result<(Vec<Ministry>, u64), AppError> {
    let rows = sqlx::query_as::<_, Ministry>(&format!(
        "SELECT {} FROM ministries ORDER BY name->>'en' LIMIT $1 OFFSET $2",
        MINISTRY_COLUMNS
    ))
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ministries")
        .fetch_one(pool)
        .await?;
    Ok((rows, total.0 as u64))
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Ministry>, AppError> {
    let row = sqlx::query_as::<_, Ministry>(&format!(
        "SELECT {} FROM ministries WHERE id = $1",
        MINISTRY_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, body: &NewMinistry) -> Result<Ministry, AppError> {
    let row = sqlx::query_as::<_, Ministry>(&format!(
        "INSERT INTO ministries (name, description, leader, contact_email) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        MINISTRY_COLUMNS
    ))
    .bind(Json(&body.name))
    .bind(Json(&body.description))
    .bind(&body.leader)
    .bind(&body.contact_email)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    body: &NewMinistry,
) -> Result<Option<Ministry>, AppError> {
    let row = sqlx::query_as::<_, Ministry>(&format!(
        "UPDATE ministries SET name = $2, description = $3, leader = $4, contact_email = $5, \
         updated_at = NOW() WHERE id = $1 RETURNING {}",
        MINISTRY_COLUMNS
    ))
    .bind(id)
    .bind(Json(&body.name))
    .bind(Json(&body.description))
    .bind(&body.leader)
    .bind(&body.contact_email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM ministries WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(deleted.is_some())
}
