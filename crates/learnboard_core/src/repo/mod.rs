//! Activity store abstractions.
//!
//! # Responsibility
//! - Define the read-only contract the pipeline consumes.
//! - Keep record validation at the store boundary.
//!
//! # Invariants
//! - Stores are immutable after construction.
//! - Malformed records are rejected at load, never surfaced to the pipeline.

pub mod activity_repo;
