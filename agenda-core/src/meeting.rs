//! Meeting records and their wire format.
//!
//! Meetings are serialized as camelCase JSON so the on-disk collection keeps
//! the format earlier versions of the app wrote (`isDeleted`, `dateTime` with
//! minute precision).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_ACTIVE, STATUS_ARCHIVED, STATUS_DELETED};

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Opaque unique id, assigned once at creation and never reused.
    pub id: String,
    #[serde(with = "minute_format")]
    pub date_time: NaiveDateTime,
    pub subject: String,
    pub officer: String,
    pub location: String,
    #[serde(default)]
    pub notes: String,
    /// `true` means archived: hidden from active views, kept in the
    /// all-records view until permanently deleted.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Meeting {
    /// Local calendar date this meeting falls on.
    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }

    /// Status label shown in table views.
    pub fn status_label(&self) -> &'static str {
        if self.is_deleted { STATUS_ARCHIVED } else { STATUS_ACTIVE }
    }

    /// Status label used by the CSV/PDF exports.
    pub fn export_status(&self) -> &'static str {
        if self.is_deleted { STATUS_DELETED } else { STATUS_ACTIVE }
    }
}

/// Creation payload: everything the user supplies for a new meeting.
/// Id assignment and the archived flag are the store's business.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeeting {
    pub date_time: NaiveDateTime,
    pub subject: String,
    pub officer: String,
    pub location: String,
    pub notes: String,
}

/// A per-field validation failure, surfaced inline by the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl NewMeeting {
    /// Trim surrounding whitespace from every text field.
    pub fn normalized(mut self) -> Self {
        self.subject = self.subject.trim().to_string();
        self.officer = self.officer.trim().to_string();
        self.location = self.location.trim().to_string();
        self.notes = self.notes.trim().to_string();
        self
    }

    /// Required-field checks. An empty result means the payload may be saved;
    /// anything else must block the save and never reach the store.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.subject.trim().is_empty() {
            errors.push(FieldError { field: "subject", message: "subject is required" });
        }
        if self.officer.trim().is_empty() {
            errors.push(FieldError { field: "officer", message: "officer is required" });
        }
        if self.location.trim().is_empty() {
            errors.push(FieldError { field: "location", message: "location is required" });
        }
        errors
    }
}

/// Minute-precision `YYYY-MM-DDTHH:MM` timestamps. The deserializer also
/// accepts a seconds suffix so collections written by other tools still load.
mod minute_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const MINUTE: &str = "%Y-%m-%dT%H:%M";
    const SECOND: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(MINUTE).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&s, MINUTE)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, SECOND))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap()
    }

    fn sample() -> Meeting {
        Meeting {
            id: "abc-123".to_string(),
            date_time: dt(2024, 3, 5, 10, 0),
            subject: "Planejamento".to_string(),
            officer: "Silva".to_string(),
            location: "Sala 2".to_string(),
            notes: String::new(),
            is_deleted: false,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys_and_minute_precision() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"dateTime\":\"2024-03-05T10:00\""));
        assert!(json.contains("\"isDeleted\":false"));
        assert!(!json.contains("date_time"));
    }

    #[test]
    fn deserializer_accepts_seconds_suffix() {
        let json = r#"{"id":"x","dateTime":"2024-03-05T10:00:30","subject":"a",
                       "officer":"b","location":"c","notes":"","isDeleted":true}"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(10, 0, 30).unwrap();
        assert_eq!(meeting.date_time, expected);
        assert!(meeting.is_deleted);
    }

    #[test]
    fn round_trips_through_json() {
        let meeting = sample();
        let json = serde_json::to_string(&meeting).unwrap();
        assert_eq!(serde_json::from_str::<Meeting>(&json).unwrap(), meeting);
    }

    #[test]
    fn validate_requires_non_blank_text_fields() {
        let data = NewMeeting {
            date_time: dt(2024, 3, 5, 10, 0),
            subject: "   ".to_string(),
            officer: "Silva".to_string(),
            location: String::new(),
            notes: String::new(),
        };
        let fields: Vec<_> = data.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["subject", "location"]);
    }

    #[test]
    fn normalized_trims_all_text_fields() {
        let data = NewMeeting {
            date_time: dt(2024, 3, 5, 10, 0),
            subject: "  Planejamento ".to_string(),
            officer: " Silva".to_string(),
            location: "Sala 2  ".to_string(),
            notes: " ok ".to_string(),
        }
        .normalized();
        assert_eq!(data.subject, "Planejamento");
        assert_eq!(data.officer, "Silva");
        assert_eq!(data.location, "Sala 2");
        assert_eq!(data.notes, "ok");
        assert!(data.validate().is_empty());
    }

    #[test]
    fn status_labels_follow_the_archived_flag() {
        let mut meeting = sample();
        assert_eq!(meeting.status_label(), "Ativa");
        assert_eq!(meeting.export_status(), "Ativa");
        meeting.is_deleted = true;
        assert_eq!(meeting.status_label(), "Arquivada");
        assert_eq!(meeting.export_status(), "Excluída");
    }
}
