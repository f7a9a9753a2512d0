//! Request validation for the fixed DTOs.

use crate::error::AppError;
use crate::i18n::Localized;
use crate::models::{NewContactMessage, NewEvent, NewMinistry, NewRsvp, NewSermon};
use regex::Regex;
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

pub fn require_nonempty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn require_email(field: &str, value: &str) -> Result<(), AppError> {
    require_nonempty(field, value)?;
    if !email_re().is_match(value.trim()) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

/// All three translations must be present and non-blank at creation.
pub fn require_localized(field: &str, value: &Localized) -> Result<(), AppError> {
    if !value.is_complete() {
        return Err(AppError::Validation(format!(
            "{} must include en, fr, and ar translations",
            field
        )));
    }
    Ok(())
}

pub fn validate_new_event(body: &NewEvent) -> Result<(), AppError> {
    require_localized("title", &body.title)?;
    require_localized("description", &body.description)?;
    require_nonempty("category", &body.category)?;
    if let Some(cap) = body.capacity {
        if cap < 1 {
            return Err(AppError::Validation("capacity must be at least 1".into()));
        }
    }
    if let Some(ends) = body.ends_at {
        if ends < body.starts_at {
            return Err(AppError::Validation("endsAt must not precede startsAt".into()));
        }
    }
    Ok(())
}

pub fn validate_new_rsvp(body: &NewRsvp) -> Result<(), AppError> {
    require_nonempty("name", &body.name)?;
    require_email("email", &body.email)?;
    if body.party_size < 1 {
        return Err(AppError::Validation(
            "numberOfAttendees must be at least 1".into(),
        ));
    }
    Ok(())
}

pub fn validate_new_sermon(body: &NewSermon) -> Result<(), AppError> {
    require_localized("title", &body.title)?;
    require_localized("description", &body.description)?;
    require_nonempty("speaker", &body.speaker)?;
    require_nonempty("category", &body.category)?;
    Ok(())
}

pub fn validate_new_ministry(body: &NewMinistry) -> Result<(), AppError> {
    require_localized("name", &body.name)?;
    require_localized("description", &body.description)?;
    if let Some(email) = body.contact_email.as_deref() {
        require_email("contactEmail", email)?;
    }
    Ok(())
}

pub fn validate_new_contact(body: &NewContactMessage) -> Result<(), AppError> {
    require_nonempty("name", &body.name)?;
    require_email("email", &body.email)?;
    require_nonempty("message", &body.message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn localized(s: &str) -> Localized {
        Localized {
            en: s.into(),
            fr: format!("{} (fr)", s),
            ar: format!("{} (ar)", s),
        }
    }

    fn new_event() -> NewEvent {
        NewEvent {
            title: localized("Picnic"),
            description: localized("Annual picnic"),
            category: "fellowship".into(),
            location: None,
            starts_at: Utc.with_ymd_and_hms(2026, 9, 12, 10, 0, 0).unwrap(),
            ends_at: None,
            capacity: Some(50),
        }
    }

    #[test]
    fn email_format_is_checked() {
        assert!(require_email("email", "ann@x.com").is_ok());
        assert!(require_email("email", "ann@x").is_err());
        assert!(require_email("email", "not-an-email").is_err());
        assert!(require_email("email", "").is_err());
    }

    #[test]
    fn incomplete_translation_is_rejected() {
        let mut event = new_event();
        event.title.ar = String::new();
        let err = validate_new_event(&event).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut event = new_event();
        event.capacity = Some(0);
        assert!(validate_new_event(&event).is_err());
        event.capacity = None;
        assert!(validate_new_event(&event).is_ok());
    }

    #[test]
    fn event_end_before_start_is_rejected() {
        let mut event = new_event();
        event.ends_at = Some(event.starts_at - chrono::Duration::hours(1));
        assert!(validate_new_event(&event).is_err());
    }

    #[test]
    fn rsvp_requires_name_email_and_positive_party() {
        let mut rsvp = NewRsvp {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: None,
            party_size: 1,
            message: None,
        };
        assert!(validate_new_rsvp(&rsvp).is_ok());
        rsvp.party_size = 0;
        assert!(validate_new_rsvp(&rsvp).is_err());
        rsvp.party_size = 2;
        rsvp.name = "  ".into();
        assert!(validate_new_rsvp(&rsvp).is_err());
    }

    #[test]
    fn ministry_contact_email_optional_but_validated() {
        let mut ministry = NewMinistry {
            name: localized("Choir"),
            description: localized("Sings"),
            leader: None,
            contact_email: None,
        };
        assert!(validate_new_ministry(&ministry).is_ok());
        ministry.contact_email = Some("bad".into());
        assert!(validate_new_ministry(&ministry).is_err());
    }
}
