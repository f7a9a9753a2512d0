//! Auth handlers: login, logout, and session introspection.

use crate::auth::{issue_token, CurrentUser};
use crate::error::AppError;
use crate::extract::Json;
use crate::models::User;
use crate::response;
use crate::service::users;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// Invalid email and invalid password return the same 401 so callers cannot
/// enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = users::get_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %request.email, "login: unknown email");
            AppError::Unauthorized("Invalid email or password".into())
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("bcrypt: {}", e)))?;
    if !valid {
        tracing::warn!(email = %user.email, "login: bad password");
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    let token = issue_token(
        user.id,
        &user.email,
        user.role(),
        &state.config.jwt_secret,
        state.config.token_ttl_hours,
    )?;
    tracing::info!(email = %user.email, role = %user.role, "login ok");
    Ok(response::ok(LoginData { token, user }))
}

/// Tokens are stateless; logout exists for the client contract and simply
/// acknowledges so the client can drop its copy.
pub async fn logout() -> impl IntoResponse {
    response::ok(serde_json::json!({ "loggedOut": true }))
}

pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let user = users::get_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("user no longer exists".into()))?;
    Ok(response::ok(user))
}
