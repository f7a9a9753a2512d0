//! Event queries, including the RSVP acceptance transaction.
//!
//! RSVP acceptance takes a row lock on the event before the duplicate and
//! capacity checks, so check-and-append is atomic under concurrent
//! submissions for the same event.

use crate::error::{conflict_on_unique, AppError};
use crate::models::{party_fits, Event, NewEvent, NewRsvp, Rsvp};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

const EVENT_COLUMNS: &str =
    "id, title, description, category, location, starts_at, ends_at, capacity, created_at, updated_at";

pub const DUPLICATE_RSVP: &str = "An RSVP with this email already exists for this event";
pub const EVENT_FULL: &str = "Event is at full capacity";

/// Accept/reject decision for an RSVP, once the event row is locked and the
/// occupancy is known. One entry per email per event; duplicates lose even
/// when space remains.
pub fn admit_rsvp(
    already_rsvped: bool,
    capacity: Option<i32>,
    attendees: i64,
    party_size: i32,
) -> Result<(), AppError> {
    if already_rsvped {
        return Err(AppError::Conflict(DUPLICATE_RSVP.into()));
    }
    if !party_fits(capacity, attendees, party_size) {
        return Err(AppError::Conflict(EVENT_FULL.into()));
    }
    Ok(())
}

pub struct EventFilter {
    pub category: Option<String>,
    pub upcoming: bool,
}

pub async fn list(
    pool: &PgPool,
    filter: &EventFilter,
    limit: u32,
    offset: u32,
) -> Result<(Vec<Event>, u64), AppError> {
    tracing::debug!(category = ?filter.category, upcoming = filter.upcoming, limit, offset, "list events");
    let rows = sqlx::query_as::<_, Event>(&format!(
        "SELECT {} FROM events \
         WHERE ($1::text IS NULL OR category = $1) AND (NOT $2 OR starts_at >= NOW()) \
         ORDER BY starts_at LIMIT $3 OFFSET $4",
        EVENT_COLUMNS
    ))
    .bind(&filter.category)
    .bind(filter.upcoming)
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;
    let total: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM events \
         WHERE ($1::text IS NULL OR category = $1) AND (NOT $2 OR starts_at >= NOW())",
    )
    .bind(&filter.category)
    .bind(filter.upcoming)
    .fetch_one(pool)
    .await?;
    Ok((rows, total.0 as u64))
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Event>, AppError> {
    let row = sqlx::query_as::<_, Event>(&format!(
        "SELECT {} FROM events WHERE id = $1",
        EVENT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// RSVP occupancy for one event: (entries, total attendees).
pub async fn occupancy(pool: &PgPool, id: Uuid) -> Result<(i64, i64), AppError> {
    let row: (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(party_size), 0)::bigint \
         FROM event_rsvps WHERE event_id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn categories(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let rows = sqlx::query_scalar("SELECT DISTINCT category FROM events ORDER BY category")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, body: &NewEvent) -> Result<Event, AppError> {
    let row = sqlx::query_as::<_, Event>(&format!(
        "INSERT INTO events (title, description, category, location, starts_at, ends_at, capacity) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
        EVENT_COLUMNS
    ))
    .bind(Json(&body.title))
    .bind(Json(&body.description))
    .bind(&body.category)
    .bind(&body.location)
    .bind(body.starts_at)
    .bind(body.ends_at)
    .bind(body.capacity)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Full replace of mutable fields. Capacity edited below current occupancy is
/// accepted and not re-validated against existing RSVPs.
pub async fn update(pool: &PgPool, id: Uuid, body: &NewEvent) -> Result<Option<Event>, AppError> {
    let row = sqlx::query_as::<_, Event>(&format!(
        "UPDATE events SET title = $2, description = $3, category = $4, location = $5, \
         starts_at = $6, ends_at = $7, capacity = $8, updated_at = NOW() \
         WHERE id = $1 RETURNING {}",
        EVENT_COLUMNS
    ))
    .bind(id)
    .bind(Json(&body.title))
    .bind(Json(&body.description))
    .bind(&body.category)
    .bind(&body.location)
    .bind(body.starts_at)
    .bind(body.ends_at)
    .bind(body.capacity)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let deleted: Option<(Uuid,)> = sqlx::query_as("DELETE FROM events WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(deleted.is_some())
}

pub async fn list_rsvps(pool: &PgPool, event_id: Uuid) -> Result<Vec<Rsvp>, AppError> {
    let rows = sqlx::query_as::<_, Rsvp>(
        "SELECT id, event_id, name, email, phone, party_size, message, created_at \
         FROM event_rsvps WHERE event_id = $1 ORDER BY created_at",
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Accept an RSVP: lock the event row, reject duplicates and over-capacity
/// parties, then append. The whole sequence commits or nothing does.
pub async fn accept_rsvp(pool: &PgPool, event_id: Uuid, body: &NewRsvp) -> Result<Rsvp, AppError> {
    let mut tx = pool.begin().await?;

    let event: Option<(Option<i32>,)> =
        sqlx::query_as("SELECT capacity FROM events WHERE id = $1 FOR UPDATE")
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?;
    let capacity = event.ok_or_else(|| AppError::NotFound("Event not found".into()))?.0;

    let duplicate: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM event_rsvps \
         WHERE event_id = $1 AND lower(email) = lower($2))",
    )
    .bind(event_id)
    .bind(&body.email)
    .fetch_one(&mut *tx)
    .await?;

    let attendees: (i64,) = if capacity.is_some() {
        sqlx::query_as(
            "SELECT COALESCE(SUM(party_size), 0)::bigint FROM event_rsvps WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(&mut *tx)
        .await?
    } else {
        (0,)
    };
    admit_rsvp(duplicate.0, capacity, attendees.0, body.party_size)?;

    let rsvp = sqlx::query_as::<_, Rsvp>(
        "INSERT INTO event_rsvps (event_id, name, email, phone, party_size, message) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, event_id, name, email, phone, party_size, message, created_at",
    )
    .bind(event_id)
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.phone)
    .bind(body.party_size)
    .bind(&body.message)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| conflict_on_unique(e, DUPLICATE_RSVP))?;

    tx.commit().await?;
    tracing::debug!(%event_id, email = %rsvp.email, party = rsvp.party_size, "rsvp accepted");
    Ok(rsvp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_rsvp_for_the_same_email_conflicts_even_with_space() {
        let err = admit_rsvp(true, Some(100), 1, 1).unwrap_err();
        match err {
            AppError::Conflict(msg) => assert_eq!(msg, DUPLICATE_RSVP),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn full_event_conflicts_with_the_capacity_message() {
        let err = admit_rsvp(false, Some(2), 2, 1).unwrap_err();
        match err {
            AppError::Conflict(msg) => assert_eq!(msg, EVENT_FULL),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_wins_over_capacity() {
        // A returning duplicate at a full event reads as "already RSVPed",
        // not "event full".
        let err = admit_rsvp(true, Some(2), 2, 1).unwrap_err();
        match err {
            AppError::Conflict(msg) => assert_eq!(msg, DUPLICATE_RSVP),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn fresh_email_with_room_is_admitted() {
        assert!(admit_rsvp(false, Some(2), 0, 2).is_ok());
        assert!(admit_rsvp(false, None, 10_000, 500).is_ok());
    }
}
