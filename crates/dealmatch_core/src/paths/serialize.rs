//! Selection-to-path serialization.
//!
//! # Responsibility
//! - Walk the taxonomy top-down and emit one string per collapse point.
//! - Format paths per picker convention (bare names vs joined paths).
//!
//! # Invariants
//! - A fully-selected branch emits exactly one string and is not descended.
//! - Output order follows taxonomy document order; repeated calls without
//!   mutation yield identical output.

use crate::engine::state::SelectionState;
use crate::model::taxonomy::{NodeRecord, Taxonomy};

/// Separator between path segments in joined output.
pub const PATH_SEPARATOR: &str = " > ";

/// Path formatting convention for one picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Emit only the collapse node's own name.
    ///
    /// Used by the industry picker; the backend stores a flat list of
    /// sector/group/industry names.
    Bare,
    /// Emit the name path joined with [`PATH_SEPARATOR`], omitting the root
    /// tier's name. A root-tier collapse node emits its bare name.
    ///
    /// Used by the geography picker: a region reads "United States", a
    /// sub-region reads "Germany > Bavaria", a fully-selected continent
    /// collapses to "North America".
    Joined,
}

/// Formats the path string for one node under the given style.
pub fn display_path(record: &NodeRecord, style: PathStyle) -> String {
    match style {
        PathStyle::Bare => record.name.clone(),
        PathStyle::Joined => {
            if record.depth == 0 {
                record.name.clone()
            } else {
                record.name_path[1..].join(PATH_SEPARATOR)
            }
        }
    }
}

/// Serializes the current selection into flat path strings.
///
/// Top-down walk in document order: a node whose whole leaf set is selected
/// contributes one string and its subtree is skipped (collapse rule);
/// otherwise recursion continues into its children.
pub fn selected_paths(
    taxonomy: &Taxonomy,
    state: &SelectionState,
    style: PathStyle,
) -> Vec<String> {
    let mut paths = Vec::new();
    for root in taxonomy.roots() {
        emit(taxonomy, state, style, root, &mut paths);
    }
    paths
}

fn emit(
    taxonomy: &Taxonomy,
    state: &SelectionState,
    style: PathStyle,
    id: &str,
    paths: &mut Vec<String>,
) {
    let Some(record) = taxonomy.record(id) else {
        return;
    };
    if state.is_fully_selected(taxonomy, id) {
        paths.push(display_path(record, style));
        return;
    }
    for child in &record.children {
        emit(taxonomy, state, style, child, paths);
    }
}
