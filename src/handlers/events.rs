//! Event handlers: public listings and RSVP, editor CRUD, admin RSVP list.

use crate::error::AppError;
use crate::extract::Json;
use crate::models::{spots_left, EventDetail, NewEvent, NewRsvp};
use crate::response;
use crate::service::{events, validation};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct EventListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub upcoming: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = response::page_window(query.page, query.limit);
    let filter = events::EventFilter {
        category: query.category,
        upcoming: query.upcoming.unwrap_or(false),
    };
    let (rows, total) = events::list(&state.pool, &filter, limit, offset).await?;
    Ok(response::list(rows, total, page, limit))
}

pub async fn upcoming(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = response::page_window(query.page, query.limit);
    let filter = events::EventFilter {
        category: query.category,
        upcoming: true,
    };
    let (rows, total) = events::list(&state.pool, &filter, limit, offset).await?;
    Ok(response::list(rows, total, page, limit))
}

pub async fn categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let names = events::categories(&state.pool).await?;
    Ok(response::ok(names))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let event = events::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
    let (rsvp_count, attendee_count) = events::occupancy(&state.pool, id).await?;
    let spots = spots_left(event.capacity, attendee_count);
    Ok(response::ok(EventDetail {
        event,
        rsvp_count,
        attendee_count,
        spots_left: spots,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_event(&body)?;
    let event = events::create(&state.pool, &body).await?;
    Ok(response::created(event))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_event(&body)?;
    let event = events::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
    Ok(response::ok(event))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !events::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Event not found".into()));
    }
    Ok(response::ok(serde_json::json!({ "deleted": id })))
}

pub async fn rsvp(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewRsvp>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_rsvp(&body)?;
    let rsvp = events::accept_rsvp(&state.pool, id, &body).await?;
    Ok(response::created(rsvp))
}

pub async fn list_rsvps(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if events::get(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound("Event not found".into()));
    }
    let rows = events::list_rsvps(&state.pool, id).await?;
    let total = rows.len() as u64;
    Ok(response::list(rows, total, 1, total.max(1) as u32))
}
