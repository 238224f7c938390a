//! Activity store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the immutable activity collection for the process lifetime.
//! - Validate producer-supplied records once, at load time.
//!
//! # Invariants
//! - Activity order is the load order and never changes.
//! - Every stored record passed `Activity::validate()`.
//! - Activity ids are unique within one store.

use crate::model::activity::{Activity, ActivityId, ActivityValidationError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised while building an activity store.
#[derive(Debug)]
pub enum RepoError {
    Io(std::io::Error),
    /// Source text is not a JSON array of activities.
    Json(serde_json::Error),
    Validation {
        id: ActivityId,
        source: ActivityValidationError,
    },
    DuplicateId(ActivityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read activity store: {err}"),
            Self::Json(err) => write!(f, "invalid activity store json: {err}"),
            Self::Validation { id, source } => write!(f, "invalid activity `{id}`: {source}"),
            Self::DuplicateId(id) => write!(f, "duplicate activity id `{id}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Read-only access to the activity collection.
///
/// Implementations keep activity ids unique.
pub trait ActivityRepository {
    /// All activities in load order.
    fn list_activities(&self) -> &[Activity];

    fn get_activity(&self, id: &str) -> Option<&Activity> {
        self.list_activities()
            .iter()
            .find(|activity| activity.id == id)
    }

    fn count(&self) -> usize {
        self.list_activities().len()
    }

    /// Distinct subjects in first-seen order.
    fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.list_activities()
            .iter()
            .map(|activity| activity.subject.as_str())
            .filter(|subject| seen.insert(*subject))
            .collect()
    }
}

/// Activity store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    activities: Vec<Activity>,
}

impl InMemoryActivityRepository {
    /// Builds a store after validating every record.
    ///
    /// # Errors
    /// - `Validation` when any record breaks an activity invariant.
    /// - `DuplicateId` when two records share an id.
    pub fn try_new(activities: Vec<Activity>) -> RepoResult<Self> {
        validate_records(&activities)?;
        info!(
            "event=store_load module=repo status=ok count={}",
            activities.len()
        );
        Ok(Self { activities })
    }

    /// Parses a JSON array of activities.
    pub fn from_json_str(json: &str) -> RepoResult<Self> {
        let activities: Vec<Activity> = serde_json::from_str(json)?;
        Self::try_new(activities)
    }

    /// Reads and parses a JSON activity file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepoResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn into_inner(self) -> Vec<Activity> {
        self.activities
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn list_activities(&self) -> &[Activity] {
        &self.activities
    }
}

fn validate_records(activities: &[Activity]) -> RepoResult<()> {
    let mut ids = HashSet::with_capacity(activities.len());
    for activity in activities {
        if let Err(source) = activity.validate() {
            warn!(
                "event=store_load module=repo status=error reason=validation id={}",
                activity.id
            );
            return Err(RepoError::Validation {
                id: activity.id.clone(),
                source,
            });
        }
        if !ids.insert(activity.id.as_str()) {
            warn!(
                "event=store_load module=repo status=error reason=duplicate_id id={}",
                activity.id
            );
            return Err(RepoError::DuplicateId(activity.id.clone()));
        }
    }
    Ok(())
}

impl<R: ActivityRepository + ?Sized> ActivityRepository for &R {
    fn list_activities(&self) -> &[Activity] {
        (**self).list_activities()
    }
}
