//! Learning activity domain model.
//!
//! # Responsibility
//! - Define the canonical activity record and its closed enumerations.
//! - Keep presentation lookup tables exhaustive over those enumerations.
//!
//! # Invariants
//! - Activity records are immutable once loaded into a store.
//! - Adding an enum variant must force every lookup table to be updated.

pub mod activity;
pub mod schedule;
