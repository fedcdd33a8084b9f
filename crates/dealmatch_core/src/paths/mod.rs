//! Flat path-string layer.
//!
//! # Responsibility
//! - Serialize selection state into the flat path strings the backend
//!   persists (`targetCriteria.countries`, `targetCriteria.industrySectors`).
//! - Reconstruct selection state from previously persisted path strings.
//!
//! # Invariants
//! - Serialization collapses a fully-selected subtree into one string.
//! - Hydrating serialized output and re-serializing yields the same set.
//! - Stale or unknown path strings are skipped, never an error.

pub mod hydrate;
pub mod serialize;
