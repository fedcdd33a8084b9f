//! Picker use-case services.
//!
//! # Responsibility
//! - Bundle taxonomy snapshot, selection state, mode, and path style into
//!   one per-form session facade.
//! - Keep UI/FFI layers decoupled from engine and serialization details.

pub mod session;
