//! Tag/date selection state and its application to a collection.
//!
//! # Invariants
//! - Tag matching is conjunctive: an entry must carry every selected tag.
//! - Tag and date comparisons are exact, case-sensitive string equality.
//! - An empty selection matches everything.

use crate::model::entity::DirectoryEntry;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_tags: BTreeSet<String>,
    selected_date: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tag` if absent, removes it if present.
    ///
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// Replaces the date selection; `None` clears it.
    pub fn select_date(&mut self, date: Option<String>) {
        self.selected_date = date;
    }

    pub fn clear(&mut self) {
        self.selected_tags.clear();
        self.selected_date = None;
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn is_active(&self) -> bool {
        !self.selected_tags.is_empty() || self.selected_date.is_some()
    }

    pub fn matches<E: DirectoryEntry>(&self, entry: &E) -> bool {
        let date_ok = match self.selected_date.as_deref() {
            Some(date) => entry.date() == Some(date),
            None => true,
        };
        date_ok && self.selected_tags.iter().all(|tag| entry.has_tag(tag))
    }

    /// Returns the entries to render, preserving collection order.
    pub fn apply<'a, E: DirectoryEntry>(&self, entries: &'a [E]) -> Vec<&'a E> {
        entries.iter().filter(|entry| self.matches(*entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::FilterState;

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut state = FilterState::new();
        assert!(state.toggle_tag("AI"));
        assert!(state.selected_tags().contains("AI"));
        assert!(!state.toggle_tag("AI"));
        assert!(state.selected_tags().is_empty());
    }

    #[test]
    fn clear_resets_tags_and_date() {
        let mut state = FilterState::new();
        state.toggle_tag("AI");
        state.select_date(Some("2024-03-01".to_string()));
        assert!(state.is_active());
        state.clear();
        assert!(!state.is_active());
        assert_eq!(state.selected_date(), None);
    }
}
