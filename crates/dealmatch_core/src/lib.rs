//! Core selection-engine logic for DealMatch taxonomy pickers.
//! This crate is the single source of truth for selection invariants.

pub mod engine;
pub mod logging;
pub mod model;
pub mod paths;
pub mod search;
pub mod service;

pub use engine::state::{SelectionFlag, SelectionState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{NodeId, TaxonomyNode};
pub use model::taxonomy::{
    NodeRecord, Taxonomy, TaxonomyError, TaxonomyResult, GEOGRAPHY_TIERS, INDUSTRY_TIERS,
};
pub use paths::hydrate::{hydrate, remove_path, resolve_path};
pub use paths::serialize::{display_path, selected_paths, PathStyle, PATH_SEPARATOR};
pub use search::filter::filter_tree;
pub use service::session::{PickerSession, SelectionMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
