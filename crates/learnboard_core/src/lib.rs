//! Core filtering, ordering and pagination logic for the learnboard
//! activity dashboard.
//! This crate is the single source of truth for pipeline invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DashboardConfig, DEFAULT_ITEMS_PER_PAGE};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::activity::{
    Activity, ActivityId, ActivityStatus, ActivityType, ActivityValidationError,
};
pub use model::schedule::{due_info, DueInfo, DueKind, Urgency};
pub use query::criteria::{FilterCriteria, SortKey};
pub use query::ordering::sort_activities;
pub use query::pagination::{paginate, Page};
pub use query::predicate::{filter_activities, ActivityFilter};
pub use repo::activity_repo::{
    ActivityRepository, InMemoryActivityRepository, RepoError, RepoResult,
};
pub use service::dashboard_service::{DashboardService, DashboardView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
