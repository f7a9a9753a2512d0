//! Locale table endpoint: the client fetches one flat string table plus the
//! reading direction for the requested locale.

use crate::i18n::{messages, Locale};
use crate::response::{self, One};
use axum::{extract::Path, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTable {
    pub locale: &'static str,
    pub dir: &'static str,
    pub messages: Map<String, Value>,
}

pub async fn table(Path(tag): Path<String>) -> (StatusCode, Json<One<LocaleTable>>) {
    let locale = Locale::from_tag(&tag);
    let mut table = Map::new();
    for (key, value) in messages(locale) {
        table.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    response::ok(LocaleTable {
        locale: locale.as_str(),
        dir: locale.dir().as_str(),
        messages: table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn arabic_table_is_rtl() {
        let response = table(Path("ar".into())).await;
        let (_, body) = response;
        assert_eq!(body.0.data.locale, "ar");
        assert_eq!(body.0.data.dir, "rtl");
        assert!(body.0.data.messages.contains_key("nav.home"));
    }

    #[tokio::test]
    async fn unknown_tag_falls_back_to_english_ltr() {
        let (_, body) = table(Path("pt-BR".into())).await;
        assert_eq!(body.0.data.locale, "en");
        assert_eq!(body.0.data.dir, "ltr");
    }
}
