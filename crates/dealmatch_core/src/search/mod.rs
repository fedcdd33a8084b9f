//! Taxonomy search entry points.
//!
//! # Responsibility
//! - Provide filtered tree views for type-as-you-search picker UIs.
//! - Keep filtering a pure function; selection state is never touched.

pub mod filter;
