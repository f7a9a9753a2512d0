//! Request body extraction that keeps the error envelope.
//!
//! `axum::Json` answers a bad body with a plain-text 422 before the handler
//! runs. Every error this API emits is a 400 JSON envelope, so handlers take
//! this wrapper instead and rejections go through [`AppError`] like any other
//! validation failure.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
