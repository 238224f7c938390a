//! Filter criteria value object.
//!
//! # Responsibility
//! - Hold the user's current search text, selection sets and sort key.
//! - Provide the filter-bar transitions (toggle, clear all).
//!
//! # Invariants
//! - An empty selection set means "no constraint" on that dimension.
//! - `FilterCriteria::default()` is the cleared state.

use crate::model::activity::{ActivityStatus, ActivityType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Comparator used by the ordering stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Ascending due date, undated activities last.
    #[default]
    DueDate,
    /// Ascending locale-aware title.
    Title,
    /// Urgency order: overdue, in progress, not started, completed.
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::DueDate, SortKey::Title, SortKey::Status];

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::DueDate => "Sort by Due Date",
            Self::Title => "Sort by Title",
            Self::Status => "Sort by Status",
        }
    }
}

/// Complete filter and sort input for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring over title, description and subject.
    pub search_query: String,
    pub selected_types: BTreeSet<ActivityType>,
    pub selected_statuses: BTreeSet<ActivityStatus>,
    /// Exact subject names.
    pub selected_subjects: BTreeSet<String>,
    pub sort_by: SortKey,
}

impl FilterCriteria {
    /// Creates cleared criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `kind` when absent, removes it when present.
    pub fn toggle_type(&mut self, kind: ActivityType) {
        if !self.selected_types.remove(&kind) {
            self.selected_types.insert(kind);
        }
    }

    /// Adds `status` when absent, removes it when present.
    pub fn toggle_status(&mut self, status: ActivityStatus) {
        if !self.selected_statuses.remove(&status) {
            self.selected_statuses.insert(status);
        }
    }

    /// Adds `subject` when absent, removes it when present.
    pub fn toggle_subject(&mut self, subject: &str) {
        if !self.selected_subjects.remove(subject) {
            self.selected_subjects.insert(subject.to_string());
        }
    }

    /// Resets every field, including the sort key, to its default.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Number of selected chips across all dimensions.
    ///
    /// Search text does not count as a chip.
    pub fn active_filter_count(&self) -> usize {
        self.selected_types.len() + self.selected_statuses.len() + self.selected_subjects.len()
    }

    /// Returns whether the search text constrains the result.
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterCriteria, SortKey};
    use crate::model::activity::{ActivityStatus, ActivityType};

    #[test]
    fn toggles_add_then_remove() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_type(ActivityType::Quiz);
        criteria.toggle_status(ActivityStatus::Overdue);
        criteria.toggle_subject("AI");
        assert_eq!(criteria.active_filter_count(), 3);

        criteria.toggle_type(ActivityType::Quiz);
        criteria.toggle_subject("AI");
        assert_eq!(criteria.active_filter_count(), 1);
        assert!(criteria.selected_statuses.contains(&ActivityStatus::Overdue));
    }

    #[test]
    fn clear_all_restores_defaults() {
        let mut criteria = FilterCriteria::new();
        criteria.search_query = "rust".to_string();
        criteria.sort_by = SortKey::Status;
        criteria.toggle_subject("Cloud Computing");

        criteria.clear_all();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.sort_by, SortKey::DueDate);
    }

    #[test]
    fn blank_search_is_not_a_constraint() {
        let mut criteria = FilterCriteria::new();
        criteria.search_query = "   ".to_string();
        assert!(!criteria.has_search());
        assert_eq!(criteria.active_filter_count(), 0);
    }
}
