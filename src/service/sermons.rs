//! Sermon queries.

use crate::error::AppError;
use crate::models::{NewSermon, Sermon};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

const SERMON_COLUMNS: &str =
    "id, title, description, speaker, category, video_url, preached_at, created_at, updated_at";

pub struct SermonFilter {
    pub category: Option<String>,
    pub speaker: Option<String>,
}

pub async fn list(
    pool: &PgPool,
    filter: &SermonFilter,
    limit: u32,
    offset: u32,
) -> Result<(Vec<Sermon>, u64), AppError> {
    tracing::debug!(category = ?filter.category, speaker = ?filter.speaker, limit, offset, "list sermons");
    let rows = sqlx::query_as::<_, Sermon>(&format!(
        "SELECT {} FROM sermons \
         WHERE ($1::text IS NULL OR category = $1) AND ($2::text IS NULL OR speaker = $2) \
         ORDER BY preached_at DESC LIMIT $3 OFFSET $4",
        SERMON_COLUMNS
    ))
    .bind(&filter.category)
    .bind(&filter.speaker)
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;
    let total: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM sermons \
         WHERE ($1::text IS NULL OR category = $1) AND ($2::text IS NULL OR speaker = $2)",
    )
    .bind(&filter.category)
    .bind(&filter.speaker)
    .fetch_one(pool)
    .await?;
    Ok((rows, total.0 as u64))
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Sermon>, AppError> {
    let row = sqlx::query_as::<_, Sermon>(&format!(
        "SELECT {} FROM sermons WHERE id = $1",
        SERMON_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn categories(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let rows = sqlx::query_scalar("SELECT DISTINCT category FROM sermons ORDER BY category")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn speakers(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let rows = sqlx::query_scalar("SELECT DISTINCT speaker FROM sermons ORDER BY speaker")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, body: &NewSermon) -> Result<Sermon, AppError> {
    let row = sqlx::query_as::<_, Sermon>(&format!(
        "INSERT INTO sermons (title, description, speaker, category, video_url, preached_at) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
        SERMON_COLUMNS
    ))
    .bind(Json(&body.title))
    .bind(Json(&body.description))
    .bind(&body.speaker)
    .bind(&body.category)
    .bind(&body.video_url)
    .bind(body.preached_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(pool: &PgPool, id: Uuid, body: &NewSermon) -> Result<Option<Sermon>, AppError> {
    let row = sqlx::query_as::<_, Sermon>(&format!(
        "UPDATE sermons SET title = $2, description = $3, speaker = $4, category = $5, \
         video_url = $6, preached_at = $7, updated_at = NOW() \
         WHERE id = $1 RETURNING {}",
        SERMON_COLUMNS
    ))
    .bind(id)
    .bind(Json(&body.title))
    .bind(Json(&body.description))
    .bind(&body.speaker)
    .bind(&body.category)
    .bind(&body.video_url)
    .bind(body.preached_at)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let deleted: Option<(Uuid,)> = sqlx::query_as("DELETE FROM sermons WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(deleted.is_some())
}
