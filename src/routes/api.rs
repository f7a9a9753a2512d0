//! The /v1 API tree. Public routes are open; content mutations sit behind
//! the editor gate and the contact inbox and RSVP lists behind the admin gate.

use crate::auth::{require_admin, require_editor};
use crate::handlers::{auth, contact, events, i18n, ministries, sermons};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/i18n/:locale", get(i18n::table))
        .route("/events", get(events::list))
        .route("/events/upcoming", get(events::upcoming))
        .route("/events/categories", get(events::categories))
        .route("/events/:id", get(events::get))
        .route("/events/:id/rsvp", post(events::rsvp))
        .route("/sermons", get(sermons::list))
        .route("/sermons/categories", get(sermons::categories))
        .route("/sermons/speakers", get(sermons::speakers))
        .route("/sermons/:id", get(sermons::get))
        .route("/ministries", get(ministries::list))
        .route("/ministries/:id", get(ministries::get))
        .route("/contact", post(contact::submit))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me));

    let editor = Router::new()
        .route("/events", post(events::create))
        .route("/events/:id", put(events::update).delete(events::delete))
        .route("/sermons", post(sermons::create))
        .route("/sermons/:id", put(sermons::update).delete(sermons::delete))
        .route("/ministries", post(ministries::create))
        .route(
            "/ministries/:id",
            put(ministries::update).delete(ministries::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_editor,
        ));

    let admin = Router::new()
        .route("/events/:id/rsvps", get(events::list_rsvps))
        .route("/contact", get(contact::list))
        .route("/contact/:id", get(contact::get).delete(contact::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    public.merge(editor).merge(admin).with_state(state)
}
