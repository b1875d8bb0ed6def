//! Read-only derivations over the meeting collection.
//!
//! Everything here is a pure function of the slice it is given; views are
//! recomputed on demand rather than cached. Archived records are excluded
//! from every view in this module.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::constants::OFFICER_PLACEHOLDER;
use crate::date_range::DateRange;
use crate::meeting::Meeting;

/// Active meetings falling on the given calendar day.
pub fn on_day(meetings: &[Meeting], date: NaiveDate) -> Vec<&Meeting> {
    meetings
        .iter()
        .filter(|m| !m.is_deleted && m.date() == date)
        .collect()
}

/// Days of the given month with at least one active meeting (the calendar
/// grid markers).
pub fn meeting_days(meetings: &[Meeting], year: i32, month: u32) -> BTreeSet<u32> {
    meetings
        .iter()
        .filter(|m| !m.is_deleted)
        .map(|m| m.date())
        .filter(|d| d.year() == year && d.month() == month)
        .map(|d| d.day())
        .collect()
}

/// Active meetings for an exact officer match, optionally narrowed by month
/// (1-12) and year.
pub fn consult<'a>(
    meetings: &'a [Meeting],
    officer: &str,
    month: Option<u32>,
    year: Option<i32>,
) -> Vec<&'a Meeting> {
    meetings
        .iter()
        .filter(|m| !m.is_deleted && m.officer == officer)
        .filter(|m| month.is_none_or(|mo| m.date().month() == mo))
        .filter(|m| year.is_none_or(|y| m.date().year() == y))
        .collect()
}

/// Distinct officers across active meetings, sorted ascending.
pub fn distinct_officers(meetings: &[Meeting]) -> Vec<String> {
    let set: BTreeSet<&str> = meetings
        .iter()
        .filter(|m| !m.is_deleted)
        .map(|m| m.officer.as_str())
        .collect();
    set.into_iter().map(String::from).collect()
}

/// Distinct years across active meetings, most recent first.
pub fn available_years(meetings: &[Meeting]) -> Vec<i32> {
    let set: BTreeSet<i32> = meetings
        .iter()
        .filter(|m| !m.is_deleted)
        .map(|m| m.date().year())
        .collect();
    set.into_iter().rev().collect()
}

/// Aggregate statistics over a date window: active meetings only, grouped by
/// trimmed officer name.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeStats {
    pub total: usize,
    // (officer, count) in first-encountered collection order.
    officer_counts: Vec<(String, usize)>,
}

impl RangeStats {
    pub fn compute(meetings: &[Meeting], range: &DateRange) -> Self {
        let mut officer_counts: Vec<(String, usize)> = Vec::new();
        let mut total = 0;

        for m in meetings
            .iter()
            .filter(|m| !m.is_deleted && range.contains(m.date_time))
        {
            total += 1;
            let officer = m.officer.trim();
            let label = if officer.is_empty() { OFFICER_PLACEHOLDER } else { officer };
            match officer_counts.iter_mut().find(|(o, _)| o == label) {
                Some((_, n)) => *n += 1,
                None => officer_counts.push((label.to_string(), 1)),
            }
        }

        RangeStats { total, officer_counts }
    }

    /// Officer with the most meetings in the window. Ties go to the officer
    /// encountered first in collection order.
    pub fn top_officer(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (officer, count) in &self.officer_counts {
            if best.is_none_or(|(_, n)| *count > n) {
                best = Some((officer, *count));
            }
        }
        best
    }

    /// (label, count) pairs sorted by count descending, for the bar chart.
    /// The sort is stable, so equal counts keep first-encountered order.
    pub fn chart_data(&self) -> Vec<(String, usize)> {
        let mut data = self.officer_counts.clone();
        data.sort_by(|a, b| b.1.cmp(&a.1));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn meeting(when: &str, officer: &str, archived: bool) -> Meeting {
        Meeting {
            id: format!("{when}-{officer}"),
            date_time: NaiveDateTime::parse_from_str(when, "%Y-%m-%dT%H:%M").unwrap(),
            subject: "Assunto".to_string(),
            officer: officer.to_string(),
            location: "Sala 1".to_string(),
            notes: String::new(),
            is_deleted: archived,
        }
    }

    #[test]
    fn on_day_matches_calendar_date_not_time() {
        let meetings = vec![
            meeting("2024-03-05T08:00", "A", false),
            meeting("2024-03-05T18:30", "B", false),
            meeting("2024-03-06T08:00", "C", false),
        ];
        let day = on_day(&meetings, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(day.len(), 2);
    }

    #[test]
    fn archived_meetings_are_invisible_to_every_view() {
        let meetings = vec![
            meeting("2024-03-05T10:00", "A", true),
            meeting("2024-03-06T10:00", "B", false),
        ];
        assert!(on_day(&meetings, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).is_empty());
        assert_eq!(distinct_officers(&meetings), vec!["B"]);
        assert!(consult(&meetings, "A", None, None).is_empty());
        assert!(meeting_days(&meetings, 2024, 3).contains(&6));
        assert!(!meeting_days(&meetings, 2024, 3).contains(&5));
    }

    #[test]
    fn stats_group_by_trimmed_officer_with_placeholder() {
        let meetings = vec![
            meeting("2024-03-01T09:00", " Silva ", false),
            meeting("2024-03-02T09:00", "Silva", false),
            meeting("2024-03-03T09:00", "  ", false),
        ];
        let range = DateRange::days(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
        let stats = RangeStats::compute(&meetings, &range);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.top_officer(), Some(("Silva", 2)));
        assert_eq!(
            stats.chart_data(),
            vec![("Silva".to_string(), 2), ("N/E".to_string(), 1)]
        );
    }

    #[test]
    fn top_officer_tie_goes_to_first_encountered() {
        let meetings = vec![
            meeting("2024-03-01T09:00", "B", false),
            meeting("2024-03-05T10:00", "A", false),
        ];
        let range = DateRange::days(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        let stats = RangeStats::compute(&meetings, &range);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.top_officer(), Some(("B", 1)));
    }

    #[test]
    fn stats_respect_the_window_bounds() {
        let meetings = vec![
            meeting("2024-02-29T23:59", "A", false),
            meeting("2024-03-01T00:00", "B", false),
            meeting("2024-03-05T23:59", "C", false),
            meeting("2024-03-06T00:00", "D", false),
        ];
        let range = DateRange::days(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        assert_eq!(RangeStats::compute(&meetings, &range).total, 2);
    }

    #[test]
    fn consult_narrows_by_month_and_year() {
        let meetings = vec![
            meeting("2024-03-05T10:00", "Silva", false),
            meeting("2024-04-05T10:00", "Silva", false),
            meeting("2023-03-05T10:00", "Silva", false),
            meeting("2024-03-05T11:00", "Souza", false),
        ];
        assert_eq!(consult(&meetings, "Silva", None, None).len(), 3);
        assert_eq!(consult(&meetings, "Silva", Some(3), None).len(), 2);
        assert_eq!(consult(&meetings, "Silva", Some(3), Some(2024)).len(), 1);
        assert_eq!(consult(&meetings, "Silva", None, Some(2023)).len(), 1);
    }

    #[test]
    fn option_lists_are_sorted() {
        let meetings = vec![
            meeting("2024-03-05T10:00", "Souza", false),
            meeting("2023-01-05T10:00", "Silva", false),
            meeting("2022-01-05T10:00", "Silva", false),
        ];
        assert_eq!(distinct_officers(&meetings), vec!["Silva", "Souza"]);
        assert_eq!(available_years(&meetings), vec![2024, 2023, 2022]);
    }
}
