//! Router-level tests that run without a live database: probes, locale
//! tables, auth gates, and request validation all short-circuit before any
//! query is issued.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use parish_api::auth::issue_token;
use parish_api::models::Role;
use parish_api::{api_routes, common_routes_with_ready, AppState, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const JWT_SECRET: &str = "router-test-secret";

fn test_state() -> AppState {
    let config = ServerConfig {
        database_url: "postgres://localhost/parish_router_test".into(),
        bind_addr: "127.0.0.1:0".into(),
        max_connections: 1,
        jwt_secret: JWT_SECRET.into(),
        token_ttl_hours: 1,
        seed_admin_email: None,
        seed_admin_password: None,
    };
    // Lazy pool: no connection is made until a query runs, and these tests
    // never reach one.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    AppState {
        pool,
        config: Arc::new(config),
    }
}

fn app() -> Router {
    let state = test_state();
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/v1", api_routes(state))
}

fn token_for(role: Role) -> String {
    issue_token(Uuid::new_v4(), "someone@example.org", role, JWT_SECRET, 1).unwrap()
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn ready_degrades_without_database() {
    let response = app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn arabic_locale_table_is_rtl() {
    let response = app()
        .oneshot(Request::get("/v1/i18n/ar").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["dir"], "rtl");
    assert_eq!(json["data"]["locale"], "ar");
}

#[tokio::test]
async fn french_locale_table_is_ltr_and_translated() {
    let response = app()
        .oneshot(Request::get("/v1/i18n/fr-CA").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response.into_body()).await;
    assert_eq!(json["data"]["dir"], "ltr");
    assert_eq!(json["data"]["messages"]["nav.home"], "Accueil");
}

#[tokio::test]
async fn event_create_requires_a_token() {
    let response = app()
        .oneshot(
            Request::post("/v1/events")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn viewer_cannot_reach_editor_routes() {
    let response = app()
        .oneshot(
            Request::post("/v1/events")
                .header(header::AUTHORIZATION, format!("Bearer {}", token_for(Role::Viewer)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn editor_cannot_read_contact_inbox() {
    let response = app()
        .oneshot(
            Request::get("/v1/contact")
                .header(header::AUTHORIZATION, format!("Bearer {}", token_for(Role::Editor)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let response = app()
        .oneshot(
            Request::get("/v1/auth/me")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rsvp_with_zero_party_size_is_rejected_before_any_query() {
    let event_id = Uuid::new_v4();
    let response = app()
        .oneshot(
            Request::post(format!("/v1/events/{}/rsvp", event_id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"name":"Ann","email":"ann@x.com","numberOfAttendees":0}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["code"], "validation_error");
}

#[tokio::test]
async fn body_missing_a_locale_key_gets_the_error_envelope() {
    // The body never deserializes, so the rejection itself must come back in
    // the standard 400 shape rather than axum's plain-text 422.
    let body = r#"{
        "title": {"en": "Picnic", "fr": "Pique-nique"},
        "description": {"en": "d", "fr": "d", "ar": "d"},
        "category": "fellowship",
        "startsAt": "2026-09-12T10:00:00Z"
    }"#;
    let response = app()
        .oneshot(
            Request::post("/v1/events")
                .header(header::AUTHORIZATION, format!("Bearer {}", token_for(Role::Editor)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "validation_error");
}

#[tokio::test]
async fn unparseable_body_gets_the_error_envelope() {
    let response = app()
        .oneshot(
            Request::post("/v1/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("this is not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "validation_error");
}

#[tokio::test]
async fn editor_event_with_missing_translation_is_rejected() {
    let body = r#"{
        "title": {"en": "Picnic", "fr": "Pique-nique", "ar": ""},
        "description": {"en": "d", "fr": "d", "ar": "d"},
        "category": "fellowship",
        "startsAt": "2026-09-12T10:00:00Z"
    }"#;
    let response = app()
        .oneshot(
            Request::post("/v1/events")
                .header(header::AUTHORIZATION, format!("Bearer {}", token_for(Role::Editor)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("translations"));
}
