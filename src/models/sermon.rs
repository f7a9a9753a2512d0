//! Sermon rows and request DTOs.

use crate::i18n::Localized;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sermon {
    pub id: Uuid,
    pub title: Json<Localized>,
    pub description: Json<Localized>,
    pub speaker: String,
    pub category: String,
    pub video_url: Option<String>,
    pub preached_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSermon {
    pub title: Localized,
    pub description: Localized,
    pub speaker: String,
    pub category: String,
    #[serde(default)]
    pub video_url: Option<String>,
    pub preached_at: DateTime<Utc>,
}
