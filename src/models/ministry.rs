//! Ministry rows and request DTOs.

use crate::i18n::Localized;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ministry {
    pub id: Uuid,
    pub name: Json<Localized>,
    pub description: Json<Localized>,
    pub leader: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMinistry {
    pub name: Localized,
    pub description: Localized,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}
