//! Composite activity filter.
//!
//! # Responsibility
//! - Apply search text and selection sets as one conjunctive predicate.
//!
//! # Invariants
//! - Output preserves input order.
//! - Empty selection sets and blank search text never exclude anything.

use crate::model::activity::Activity;
use crate::query::criteria::FilterCriteria;

/// Criteria prepared for repeated matching.
///
/// The lowercased search needle is built once, not once per activity.
#[derive(Debug, Clone)]
pub struct ActivityFilter<'c> {
    criteria: &'c FilterCriteria,
    // The blank check trims, but the needle itself keeps surrounding spaces.
    needle: Option<String>,
}

impl<'c> ActivityFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        let needle = criteria
            .has_search()
            .then(|| criteria.search_query.to_lowercase());
        Self { criteria, needle }
    }

    /// Returns whether `activity` satisfies every active criteria dimension.
    pub fn matches(&self, activity: &Activity) -> bool {
        let criteria = self.criteria;
        if let Some(needle) = self.needle.as_deref() {
            if !matches_search(activity, needle) {
                return false;
            }
        }

        if !criteria.selected_types.is_empty() && !criteria.selected_types.contains(&activity.kind) {
            return false;
        }

        if !criteria.selected_statuses.is_empty()
            && !criteria.selected_statuses.contains(&activity.status)
        {
            return false;
        }

        if !criteria.selected_subjects.is_empty()
            && !criteria.selected_subjects.contains(&activity.subject)
        {
            return false;
        }

        true
    }
}

/// Returns the activities that satisfy every active criteria dimension.
///
/// Search text is matched case-insensitively as a substring of the title,
/// description or subject. Type, status and subject sets are membership
/// tests that apply only when non-empty.
pub fn filter_activities<'a>(
    activities: &'a [Activity],
    criteria: &FilterCriteria,
) -> Vec<&'a Activity> {
    let filter = ActivityFilter::new(criteria);
    activities
        .iter()
        .filter(|activity| filter.matches(activity))
        .collect()
}

/// Returns whether one activity satisfies `criteria`.
pub fn matches_criteria(activity: &Activity, criteria: &FilterCriteria) -> bool {
    ActivityFilter::new(criteria).matches(activity)
}

fn matches_search(activity: &Activity, needle: &str) -> bool {
    [
        activity.title.as_str(),
        activity.description.as_str(),
        activity.subject.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
