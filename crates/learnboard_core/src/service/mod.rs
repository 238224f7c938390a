//! Core use-case services.
//!
//! # Responsibility
//! - Compose the pipeline stages into the stateful dashboard flow.
//! - Keep the presentation layer decoupled from store and pipeline details.

pub mod dashboard_service;
