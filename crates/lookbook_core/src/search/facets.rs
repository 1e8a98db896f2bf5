//! Facet derivation over a loaded collection.
//!
//! # Invariants
//! - `all_tags` is duplicate-free and sorted ascending (byte order).
//! - `available_dates` is duplicate-free and excludes empty labels.
//! - Dates that parse as calendar dates come first, newest first; labels that
//!   do not parse follow in ascending lexicographic order.

use crate::model::entity::DirectoryEntry;
use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;
use std::collections::BTreeSet;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Selectable filter values derived from one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub all_tags: Vec<String>,
    pub available_dates: Vec<String>,
}

pub fn derive_facets<E: DirectoryEntry>(entries: &[E]) -> Facets {
    Facets {
        all_tags: all_tags(entries),
        available_dates: available_dates(entries),
    }
}

/// Distinct expertise and industry tags, sorted ascending.
pub fn all_tags<E: DirectoryEntry>(entries: &[E]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| entry.expertise().iter().chain(entry.industries()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty date labels, newest parseable date first.
pub fn available_dates<E: DirectoryEntry>(entries: &[E]) -> Vec<String> {
    let mut dates: Vec<(String, Option<NaiveDate>)> = entries
        .iter()
        .filter_map(|entry| entry.date())
        .filter(|date| !date.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|label| (label.to_string(), parse_date_label(label)))
        .collect();
    dates.sort_by(|(left, left_date), (right, right_date)| {
        match (left_date, right_date) {
            (Some(l), Some(r)) => r.cmp(l).then_with(|| left.cmp(right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.cmp(right),
        }
    });
    dates.into_iter().map(|(label, _)| label).collect()
}

/// Parses a free-form date label into a calendar date, if it looks like one.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    // Month-only cohort labels such as "March 2024".
    NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y").ok()
}
