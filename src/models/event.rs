//! Event rows, embedded RSVP rows, and their request DTOs.

use crate::i18n::Localized;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: Json<Localized>,
    pub description: Json<Localized>,
    pub category: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Ceiling on total attendees across RSVPs; None means unlimited.
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event detail view: the row plus RSVP occupancy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub rsvp_count: i64,
    pub attendee_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spots_left: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: Localized,
    pub description: Localized,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub capacity: Option<i32>,
}

#[derive(Clone, Debug, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "numberOfAttendees")]
    pub party_size: i32,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRsvp {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "numberOfAttendees", default = "default_party_size")]
    pub party_size: i32,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_party_size() -> i32 {
    1
}

/// Remaining spots for an event, None when capacity is unlimited.
pub fn spots_left(capacity: Option<i32>, attendees: i64) -> Option<i64> {
    capacity.map(|cap| (cap as i64 - attendees).max(0))
}

/// Whether a party of `party_size` still fits under `capacity` given
/// `attendees` already registered.
pub fn party_fits(capacity: Option<i32>, attendees: i64, party_size: i32) -> bool {
    match capacity {
        Some(cap) => attendees + party_size as i64 <= cap as i64,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_size_defaults_to_one() {
        let rsvp: NewRsvp =
            serde_json::from_str(r#"{"name":"Ann","email":"ann@x.com"}"#).unwrap();
        assert_eq!(rsvp.party_size, 1);
        assert!(rsvp.phone.is_none());
    }

    #[test]
    fn number_of_attendees_is_the_wire_name() {
        let rsvp: NewRsvp = serde_json::from_str(
            r#"{"name":"Ann","email":"ann@x.com","numberOfAttendees":3}"#,
        )
        .unwrap();
        assert_eq!(rsvp.party_size, 3);
    }

    #[test]
    fn capacity_two_admits_exactly_two() {
        // Ann takes both spots; Bo is turned away even for a party of one.
        assert!(party_fits(Some(2), 0, 2));
        assert!(!party_fits(Some(2), 2, 1));
        assert_eq!(spots_left(Some(2), 2), Some(0));
    }

    #[test]
    fn unlimited_capacity_always_fits() {
        assert!(party_fits(None, 10_000, 500));
        assert_eq!(spots_left(None, 10_000), None);
    }

    #[test]
    fn spots_left_never_negative() {
        // Capacity edited below current occupancy is not re-validated; the
        // public count still reads zero rather than a negative number.
        assert_eq!(spots_left(Some(5), 9), Some(0));
    }
}
