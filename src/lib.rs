//! Parish API: REST backend for a multilingual church website.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::AppError;
pub use i18n::{Dir, Locale, Localized};
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, seed_admin};
