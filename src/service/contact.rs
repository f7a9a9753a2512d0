//! Contact message queries.

use crate::error::AppError;
use crate::models::{ContactMessage, NewContactMessage};
use sqlx::PgPool;
use uuid::Uuid;

const CONTACT_COLUMNS: &str = "id, name, email, subject, message, created_at";

pub async fn create(pool: &PgPool, body: &NewContactMessage) -> Result<ContactMessage, AppError> {
    let row = sqlx::query_as::<_, ContactMessage>(&format!(
        "INSERT INTO contact_messages (name, email, subject, message) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        CONTACT_COLUMNS
    ))
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.subject)
    .bind(&body.message)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn list(pool: &PgPool, limit: u32, offset: u32) -> Result<(Vec<ContactMessage>, u64), AppError> {
    let rows = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {} FROM contact_messages ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        CONTACT_COLUMNS
    ))
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;
    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(pool)
        .await?;
    Ok((rows, total.0 as u64))
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<ContactMessage>, AppError> {
    let row = sqlx::query_as::<_, ContactMessage>(&format!(
        "SELECT {} FROM contact_messages WHERE id = $1",
        CONTACT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let deleted: Option<(Uuid,)> =
        sqlx::query_as("DELETE FROM contact_messages WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(deleted.is_some())
}
