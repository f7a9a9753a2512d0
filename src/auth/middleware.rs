//! Bearer-token extraction and role gates for back-office routes.

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::models::Role;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Authenticated caller decoded from the bearer token.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing Authorization header".into()))?;
    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("expected Bearer token".into()))
}

fn current_user(parts: &Parts, state: &AppState) -> Result<CurrentUser, AppError> {
    if let Some(user) = parts.extensions.get::<CurrentUser>() {
        return Ok(user.clone());
    }
    let token = bearer_token(parts)?;
    let claims = verify_token(token, &state.config.jwt_secret)?;
    Ok(CurrentUser {
        id: claims.user_id()?,
        email: claims.email,
        role: claims.role,
    })
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        current_user(parts, state)
    }
}

/// Gate for content mutations: admin or editor.
pub async fn require_editor(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(state, request, next, |role| role.can_edit(), "editor").await
}

/// Gate for admin-only routes (contact inbox, RSVP lists).
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(state, request, next, |role| role == Role::Admin, "admin").await
}

async fn gate(
    state: AppState,
    mut request: Request,
    next: Next,
    allowed: fn(Role) -> bool,
    needed: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let user = current_user(&parts, &state)?;
    if !allowed(user.role) {
        tracing::warn!(user = %user.email, role = user.role.as_str(), "role gate refused");
        return Err(AppError::Forbidden(format!("{} access required", needed)));
    }
    parts.extensions.insert(user);
    request = Request::from_parts(parts, body);
    Ok(next.run(request).await)
}
