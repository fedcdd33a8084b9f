//! Selection engine.
//!
//! # Responsibility
//! - Keep per-tier selection booleans consistent under toggles.
//! - Expose the derived selected/mixed/unselected condition for rendering.
//!
//! # Invariants
//! - After every mutation, a branch node's stored boolean is `true` iff all
//!   of its direct children's stored booleans are `true`.

pub mod state;
