//! FFI crate boundary for the DealMatch picker engine.
//!
//! # Responsibility
//! - Re-export the synchronous use-case API consumed by the UI host.

pub mod api;

pub use api::*;
