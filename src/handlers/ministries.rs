//! Ministry handlers: public listings plus editor CRUD.

use crate::error::AppError;
use crate::extract::Json;
use crate::models::NewMinistry;
use crate::response;
use crate::service::{ministries, validation};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct MinistryListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MinistryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit, offset) = response::page_window(query.page, query.limit);
    let (rows, total) = ministries::list(&state.pool, limit, offset).await?;
    Ok(response::list(rows, total, page, limit))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let ministry = ministries::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ministry not found".into()))?;
    Ok(response::ok(ministry))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewMinistry>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_ministry(&body)?;
    let ministry = ministries::create(&state.pool, &body).await?;
    Ok(response::created(ministry))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NewMinistry>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_new_ministry(&body)?;
    let ministry = ministries::update(&state.pool, id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound("Ministry not found".into()))?;
    Ok(response::ok(ministry))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !ministries::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Ministry not found".into()));
    }
    Ok(response::ok(serde_json::json!({ "deleted": id })))
}
