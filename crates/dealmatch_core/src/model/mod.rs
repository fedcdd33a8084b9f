//! Taxonomy domain model.
//!
//! # Responsibility
//! - Define the externally-supplied tree shape consumed by selection logic.
//! - Provide the indexed, immutable snapshot used by engine and paths layers.
//!
//! # Invariants
//! - Node ids are unique across one whole taxonomy snapshot.
//! - Snapshots are never mutated after construction.

pub mod node;
pub mod taxonomy;
