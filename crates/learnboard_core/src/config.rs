//! Dashboard configuration.
//!
//! # Invariants
//! - `items_per_page` is never zero once a config is constructed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page size used by the dashboard grid.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroItemsPerPage,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroItemsPerPage => write!(f, "items_per_page must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Tunables for [`crate::DashboardService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDashboardConfig")]
pub struct DashboardConfig {
    items_per_page: usize,
}

impl DashboardConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    /// - `ZeroItemsPerPage` when `items_per_page == 0`.
    pub fn new(items_per_page: usize) -> Result<Self, ConfigError> {
        if items_per_page == 0 {
            return Err(ConfigError::ZeroItemsPerPage);
        }
        Ok(Self { items_per_page })
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

#[derive(Deserialize)]
struct RawDashboardConfig {
    #[serde(default = "default_items_per_page")]
    items_per_page: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl TryFrom<RawDashboardConfig> for DashboardConfig {
    type Error = ConfigError;

    fn try_from(value: RawDashboardConfig) -> Result<Self, Self::Error> {
        Self::new(value.items_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig, DEFAULT_ITEMS_PER_PAGE};

    #[test]
    fn default_uses_four_items_per_page() {
        assert_eq!(
            DashboardConfig::default().items_per_page(),
            DEFAULT_ITEMS_PER_PAGE
        );
        assert_eq!(DEFAULT_ITEMS_PER_PAGE, 4);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(DashboardConfig::new(0), Err(ConfigError::ZeroItemsPerPage));
        assert_eq!(DashboardConfig::new(6).unwrap().items_per_page(), 6);
    }
}
