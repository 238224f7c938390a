//! Filter, ordering and pagination pipeline.
//!
//! # Responsibility
//! - Turn an immutable activity slice plus criteria into the visible page.
//! - Keep every stage a pure function of its inputs.
//!
//! # Invariants
//! - No stage mutates or reorders its input slice.
//! - Every stage is total over well-typed input.

pub mod criteria;
pub mod ordering;
pub mod pagination;
pub mod predicate;
