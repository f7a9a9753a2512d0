//! Contact form submission (public) and inbox (admin).

use crate::error::AppError;
use crate::extract::Json;
use crate::models::NewContactMessage;
use crate::response;
use crate::service::{contact, validation};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<NewContactMessage>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_contact(&body)?;
    let message = contact::create(&state.pool, &body).await?;
    tracing::info!(from = %message.email, "contact message received");
    Ok(response::created(message))
}

#[derive(Deserialize)]
pub struct ContactListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = response::page_window(query.page, query.limit);
    let (rows, total) = contact::list(&state.pool, limit, offset).await?;
    Ok(response::list(rows, total, page, limit))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let message = contact::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".into()))?;
    Ok(response::ok(message))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !contact::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Message not found".into()));
    }
    Ok(response::ok(serde_json::json!({ "deleted": id })))
}
