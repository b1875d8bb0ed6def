//! Date windows for the statistics view.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Inclusive date window spanning whole days: `from` is the start of its day,
/// `to` the last second of its day.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl Default for DateRange {
    /// Default window: first day of the current month through today.
    fn default() -> Self {
        let today = Local::now().date_naive();
        let first = today.with_day(1).unwrap_or(today);
        DateRange::days(first, today)
    }
}

impl DateRange {
    /// Window covering `from` 00:00:00 through `to` 23:59:59.
    pub fn days(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: from.and_hms_opt(0, 0, 0).unwrap(),
            to: to.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    /// Parse `YYYY-MM-DD` bounds. A missing bound falls back to the default
    /// window's corresponding edge.
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> Result<Self, String> {
        let default = DateRange::default();

        let from_dt = match from {
            Some(s) => parse_date(s)?.and_hms_opt(0, 0, 0).unwrap(),
            None => default.from,
        };

        let to_dt = match to {
            Some(s) => parse_date(s)?.and_hms_opt(23, 59, 59).unwrap(),
            None => default.to,
        };

        Ok(DateRange { from: from_dt, to: to_dt })
    }

    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        dt >= self.from && dt <= self.to
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
