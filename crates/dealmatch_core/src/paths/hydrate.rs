//! Path-to-selection hydration and removal.
//!
//! # Responsibility
//! - Resolve persisted path strings back to taxonomy nodes by display name.
//! - Re-select or deselect resolved nodes with full cascade semantics.
//!
//! # Invariants
//! - Multi-segment paths are resolved segment-by-segment by exact name.
//! - Single-segment strings match any node in the tree by exact name; when
//!   names collide the first match in document order wins and a warning is
//!   logged. Global name uniqueness is an assumption, not an enforced rule.
//! - Strings that no longer resolve against the current taxonomy (legacy
//!   profile data) are skipped without error or state corruption.

use crate::engine::state::SelectionState;
use crate::model::node::NodeId;
use crate::model::taxonomy::Taxonomy;
use crate::paths::serialize::PATH_SEPARATOR;
use log::{debug, warn};

/// Reconstructs selection state from persisted path strings.
///
/// Each resolved node is selected with the same cascade/recompute as a
/// user toggle. Returns the number of strings that resolved.
pub fn hydrate(taxonomy: &Taxonomy, state: &mut SelectionState, paths: &[String]) -> usize {
    let mut applied = 0;
    for path in paths {
        match resolve_path(taxonomy, path) {
            Some(id) => {
                state.set_node(taxonomy, &id, true);
                applied += 1;
            }
            None => {
                debug!(
                    "event=path_hydrate module=paths status=skip taxonomy={} reason=unresolved path={path}",
                    taxonomy.label()
                );
            }
        }
    }
    applied
}

/// Deselects the node a previously-emitted path string points at.
///
/// Resolution is identical to [`hydrate`]; the node and its descendants are
/// cleared and ancestors recomputed. An unresolvable path is a logged no-op.
pub fn remove_path(taxonomy: &Taxonomy, state: &mut SelectionState, path: &str) {
    match resolve_path(taxonomy, path) {
        Some(id) => {
            state.set_node(taxonomy, &id, false);
            debug!(
                "event=path_remove module=paths status=ok taxonomy={} node={id}",
                taxonomy.label()
            );
        }
        None => {
            warn!(
                "event=path_remove module=paths status=skip taxonomy={} reason=unresolved path={path}",
                taxonomy.label()
            );
        }
    }
}

/// Resolves one path string to a node id, or `None` when it is stale.
///
/// Multi-segment paths anchor at any node named like the first segment and
/// then walk children by exact segment name. Single-segment strings match
/// any node by exact name.
pub fn resolve_path(taxonomy: &Taxonomy, path: &str) -> Option<NodeId> {
    let segments: Vec<&str> = path
        .split(PATH_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => None,
        [name] => resolve_by_name(taxonomy, name),
        [first, rest @ ..] => {
            for anchor in taxonomy.nodes_named(first) {
                if let Some(id) = walk_segments(taxonomy, anchor, rest) {
                    return Some(id);
                }
            }
            None
        }
    }
}

fn resolve_by_name(taxonomy: &Taxonomy, name: &str) -> Option<NodeId> {
    let matches = taxonomy.nodes_named(name);
    if matches.len() > 1 {
        warn!(
            "event=path_resolve module=paths status=warn taxonomy={} reason=ambiguous_name name={name} count={}",
            taxonomy.label(),
            matches.len()
        );
    }
    matches.first().cloned()
}

fn walk_segments(taxonomy: &Taxonomy, anchor: &str, segments: &[&str]) -> Option<NodeId> {
    let mut current = taxonomy.record(anchor)?;
    for segment in segments {
        let next = current.children.iter().find(|child| {
            taxonomy
                .record(child.as_str())
                .map(|record| record.name == *segment)
                .unwrap_or(false)
        })?;
        current = taxonomy.record(next)?;
    }
    Some(current.id.clone())
}
