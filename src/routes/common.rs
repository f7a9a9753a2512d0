//! Deployment probes, mounted at the root rather than under /v1 so the
//! orchestrator contract survives API version bumps.
//!
//! /health answers as long as the process is up; /ready also pings the
//! database and degrades to 503 when it cannot; /version reports the build.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health() -> Json<Probe> {
    Json(Probe {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Probe>) {
    match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(Probe {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Probe {
                status: "degraded",
                database: Some("unavailable"),
            }),
        ),
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
