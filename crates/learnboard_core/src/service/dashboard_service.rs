//! Dashboard use-case service.
//!
//! # Responsibility
//! - Own the current filter criteria and page index as one state value.
//! - Memoize the filtered and ordered result between page changes.
//! - Expose page controls and the rendered page view.
//!
//! # Invariants
//! - The ordered result is recomputed only when criteria actually change.
//! - Any criteria change resets the current page to 1.
//! - `current_page` stays within `1..=max(total_pages, 1)`.
//! - The memoized order is exactly `sort_activities(filter_activities(..))`.

use crate::config::DashboardConfig;
use crate::model::activity::{Activity, ActivityStatus, ActivityType};
use crate::query::criteria::{FilterCriteria, SortKey};
use crate::query::ordering::sort_activities;
use crate::query::pagination::{paginate, total_pages, Page};
use crate::query::predicate::filter_activities;
use crate::repo::activity_repo::ActivityRepository;
use log::debug;
use std::collections::HashMap;

/// Rendered state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a> {
    pub page: Page<&'a Activity>,
    /// Activities surviving the current criteria.
    pub filtered_count: usize,
    /// Activities in the store.
    pub total_count: usize,
    pub active_filter_count: usize,
}

impl DashboardView<'_> {
    /// Whether the "no activities found" state should be shown.
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    /// Result-count line, e.g. `Showing 3 of 12 activities`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} activities",
            self.filtered_count, self.total_count
        )
    }
}

/// Stateful facade over the filter → sort → paginate pipeline.
pub struct DashboardService<R: ActivityRepository> {
    repo: R,
    config: DashboardConfig,
    criteria: FilterCriteria,
    current_page: usize,
    /// Store indices of the filtered activities, in display order.
    ordered: Vec<usize>,
}

impl<R: ActivityRepository> DashboardService<R> {
    /// Creates a service with cleared criteria on page 1.
    pub fn new(repo: R, config: DashboardConfig) -> Self {
        let mut service = Self {
            repo,
            config,
            criteria: FilterCriteria::default(),
            current_page: 1,
            ordered: Vec::new(),
        };
        service.recompute();
        service
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.ordered.len(), self.config.items_per_page())
    }

    pub fn filtered_count(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_count(&self) -> usize {
        self.repo.count()
    }

    /// Distinct store subjects for the subject filter chips.
    pub fn subjects(&self) -> Vec<&str> {
        self.repo.subjects()
    }

    /// Replaces criteria wholesale.
    ///
    /// Returns `true` when the criteria changed; the ordered result is then
    /// recomputed and the page reset to 1. Identical criteria are a no-op.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if criteria == self.criteria {
            return false;
        }
        self.criteria = criteria;
        self.current_page = 1;
        self.recompute();
        true
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        let mut next = self.criteria.clone();
        next.search_query = query.into();
        self.set_criteria(next)
    }

    pub fn toggle_type(&mut self, kind: ActivityType) -> bool {
        let mut next = self.criteria.clone();
        next.toggle_type(kind);
        self.set_criteria(next)
    }

    pub fn toggle_status(&mut self, status: ActivityStatus) -> bool {
        let mut next = self.criteria.clone();
        next.toggle_status(status);
        self.set_criteria(next)
    }

    pub fn toggle_subject(&mut self, subject: &str) -> bool {
        let mut next = self.criteria.clone();
        next.toggle_subject(subject);
        self.set_criteria(next)
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) -> bool {
        let mut next = self.criteria.clone();
        next.sort_by = sort_by;
        self.set_criteria(next)
    }

    /// Resets every criteria field to its default.
    pub fn clear_all_filters(&mut self) -> bool {
        self.set_criteria(FilterCriteria::default())
    }

    /// Jumps to `page`, clamped into `1..=max(total_pages, 1)`.
    ///
    /// Returns the page actually selected.
    pub fn change_page(&mut self, page: usize) -> usize {
        let last = self.total_pages().max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    /// Moves back one page; returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Moves forward one page; returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Ordered activities surviving the current criteria, unpaginated.
    pub fn filtered_activities(&self) -> Vec<&Activity> {
        let activities = self.repo.list_activities();
        self.ordered.iter().map(|&index| &activities[index]).collect()
    }

    /// Builds the page view for the current state.
    pub fn view(&self) -> DashboardView<'_> {
        let ordered = self.filtered_activities();
        DashboardView {
            page: paginate(&ordered, self.current_page, self.config.items_per_page()),
            filtered_count: ordered.len(),
            total_count: self.total_count(),
            active_filter_count: self.criteria.active_filter_count(),
        }
    }

    fn recompute(&mut self) {
        let activities = self.repo.list_activities();
        let criteria = &self.criteria;
        let positions: HashMap<&str, usize> = activities
            .iter()
            .enumerate()
            .map(|(index, activity)| (activity.id.as_str(), index))
            .collect();
        let filtered = filter_activities(activities, criteria);
        let ordered: Vec<usize> = sort_activities(&filtered, criteria.sort_by)
            .into_iter()
            .filter_map(|activity| positions.get(activity.id.as_str()).copied())
            .collect();

        debug!(
            "event=pipeline_recompute module=dashboard status=ok filtered={} total={} sort={:?}",
            ordered.len(),
            activities.len(),
            criteria.sort_by
        );
        self.ordered = ordered;
    }
}
