//! Sermon handlers: public listings plus editor CRUD.

use crate::error::AppError;
use crate::extract::Json;
use crate::models::NewSermon;
use crate::response;
use crate::service::{sermons, validation};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SermonListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub speaker: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SermonListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = response::page_window(query.page, query.limit);
    let filter = sermons::SermonFilter {
        category: query.category,
        speaker: query.speaker,
    };
    let (rows, total) = sermons::list(&state.pool, &filter, limit, offset).await?;
    Ok(response::list(rows, total, page, limit))
}

pub async fn categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let names = sermons::categories(&state.pool).await?;
    Ok(response::ok(names))
}

pub async fn speakers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let names = sermons::speakers(&state.pool).await?;
    Ok(response::ok(names))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sermon = sermons::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sermon not found".into()))?;
    Ok(response::ok(sermon))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSermon>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_sermon(&body)?;
    let sermon = sermons::create(&state.pool, &body).await?;
    Ok(response::created(sermon))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewSermon>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_sermon(&body)?;
    let sermon = sermons::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound("Sermon not found".into()))?;
    Ok(response::ok(sermon))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !sermons::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Sermon not found".into()));
    }
    Ok(response::ok(serde_json::json!({ "deleted": id })))
}
