//! Selection state store and tri-state propagation.
//!
//! # Responsibility
//! - Hold one boolean map per tier, keyed by node id.
//! - Cascade toggles downward and recompute ancestor booleans upward.
//! - Derive the three-valued render condition on read.
//!
//! # Invariants
//! - Missing map entries read as `false`; no entry ever contradicts the
//!   bottom-up derivation (branch true iff all children true).
//! - "Mixed" is never stored. A branch with a `false` boolean but selected
//!   descendants is the mixed condition; rendering derives it from leaves.
//! - Unknown tier labels and node ids are logged no-ops, never panics.

use crate::model::node::NodeId;
use crate::model::taxonomy::Taxonomy;
use log::{debug, warn};
use std::collections::HashMap;

/// Derived render condition for one node.
///
/// Computed from leaf booleans on read; intentionally not stored so the
/// boolean maps stay the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionFlag {
    /// Every leaf under the node is selected (for leaves: own flag is set).
    Selected,
    /// Some but not all leaves under the node are selected.
    Mixed,
    /// No leaf under the node is selected.
    Unselected,
}

/// Per-tier boolean selection maps for one taxonomy instance.
///
/// Created empty when a form mounts and discarded when it unmounts.
/// Persistence happens only through the derived path strings.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    tiers: Vec<HashMap<NodeId, bool>>,
}

impl SelectionState {
    /// Creates an empty state sized to the taxonomy's tier count.
    pub fn for_taxonomy(taxonomy: &Taxonomy) -> Self {
        Self {
            tiers: vec![HashMap::new(); taxonomy.tier_count()],
        }
    }

    /// Returns the stored boolean for one node (missing entry reads false).
    pub fn is_selected(&self, depth: usize, id: &str) -> bool {
        self.tiers
            .get(depth)
            .and_then(|tier| tier.get(id))
            .copied()
            .unwrap_or(false)
    }

    /// Flips one node's boolean and restores consistency.
    ///
    /// The new value cascades to every descendant; ancestors are then
    /// recomputed bottom-up (true iff all direct children are true).
    /// Unknown tiers/ids, or an id that lives at a different tier than
    /// named, leave the state untouched.
    pub fn toggle(&mut self, taxonomy: &Taxonomy, tier: &str, id: &str) {
        let Some(depth) = taxonomy.tier_depth(tier) else {
            warn!(
                "event=selection_toggle module=engine status=skip taxonomy={} reason=unknown_tier tier={tier}",
                taxonomy.label()
            );
            return;
        };
        let Some(record) = taxonomy.record(id) else {
            warn!(
                "event=selection_toggle module=engine status=skip taxonomy={} reason=unknown_node node={id}",
                taxonomy.label()
            );
            return;
        };
        if record.depth != depth {
            warn!(
                "event=selection_toggle module=engine status=skip taxonomy={} reason=tier_mismatch node={id} tier={tier}",
                taxonomy.label()
            );
            return;
        }

        let new_value = !self.is_selected(depth, id);
        self.apply(taxonomy, id, new_value);
        debug!(
            "event=selection_toggle module=engine status=ok taxonomy={} node={id} value={new_value}",
            taxonomy.label()
        );
    }

    /// Sets one node to an explicit value and restores consistency.
    ///
    /// Same cascade/recompute as [`SelectionState::toggle`]; used by path
    /// hydration and removal. Unknown ids are logged no-ops.
    pub fn set_node(&mut self, taxonomy: &Taxonomy, id: &str, value: bool) {
        if taxonomy.record(id).is_none() {
            warn!(
                "event=selection_set module=engine status=skip taxonomy={} reason=unknown_node node={id}",
                taxonomy.label()
            );
            return;
        }
        self.apply(taxonomy, id, value);
    }

    /// Selects every node at every tier.
    pub fn select_all(&mut self, taxonomy: &Taxonomy) {
        for id in taxonomy.doc_order() {
            if let Some(record) = taxonomy.record(id) {
                self.set(record.depth, id.clone(), true);
            }
        }
        debug!(
            "event=selection_select_all module=engine status=ok taxonomy={} nodes={}",
            taxonomy.label(),
            taxonomy.node_count()
        );
    }

    /// Clears every node at every tier.
    pub fn clear_all(&mut self) {
        for tier in &mut self.tiers {
            tier.clear();
        }
    }

    /// Derives the three-valued render condition for one node.
    ///
    /// Unknown ids read as [`SelectionFlag::Unselected`].
    pub fn flag(&self, taxonomy: &Taxonomy, id: &str) -> SelectionFlag {
        let Some(record) = taxonomy.record(id) else {
            return SelectionFlag::Unselected;
        };
        if record.is_leaf() {
            return if self.is_selected(record.depth, id) {
                SelectionFlag::Selected
            } else {
                SelectionFlag::Unselected
            };
        }

        let (selected, total) = self.count_leaves(taxonomy, id);
        if total == 0 || selected == 0 {
            SelectionFlag::Unselected
        } else if selected == total {
            SelectionFlag::Selected
        } else {
            SelectionFlag::Mixed
        }
    }

    /// Returns whether every leaf under the node is selected.
    ///
    /// For leaves this is the node's own boolean.
    pub fn is_fully_selected(&self, taxonomy: &Taxonomy, id: &str) -> bool {
        let Some(record) = taxonomy.record(id) else {
            return false;
        };
        if record.is_leaf() {
            return self.is_selected(record.depth, id);
        }
        let (selected, total) = self.count_leaves(taxonomy, id);
        total > 0 && selected == total
    }

    /// Selected leaf ids in document order.
    ///
    /// This is the net selection membership preserved by serialization.
    pub fn selected_leaves(&self, taxonomy: &Taxonomy) -> Vec<NodeId> {
        taxonomy
            .doc_order()
            .iter()
            .filter(|id| {
                taxonomy
                    .record(id.as_str())
                    .map(|record| record.is_leaf() && self.is_selected(record.depth, id.as_str()))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Overwrites one raw boolean without propagation.
    ///
    /// Callers must restore the branch invariant themselves; only mode-level
    /// code (single-select) and the bulk operations use this directly.
    pub(crate) fn set(&mut self, depth: usize, id: NodeId, value: bool) {
        if let Some(tier) = self.tiers.get_mut(depth) {
            if value {
                tier.insert(id, true);
            } else {
                tier.remove(&id);
            }
        }
    }

    fn apply(&mut self, taxonomy: &Taxonomy, id: &str, value: bool) {
        self.cascade_down(taxonomy, id, value);
        self.recompute_up(taxonomy, id);
    }

    fn cascade_down(&mut self, taxonomy: &Taxonomy, id: &str, value: bool) {
        let Some(record) = taxonomy.record(id) else {
            return;
        };
        self.set(record.depth, record.id.clone(), value);
        for child in record.children.clone() {
            self.cascade_down(taxonomy, &child, value);
        }
    }

    fn recompute_up(&mut self, taxonomy: &Taxonomy, id: &str) {
        let mut cursor = taxonomy
            .record(id)
            .and_then(|record| record.parent.clone());
        while let Some(parent_id) = cursor {
            let Some(parent) = taxonomy.record(&parent_id) else {
                break;
            };
            let all_selected = parent.children.iter().all(|child| {
                taxonomy
                    .record(child)
                    .map(|record| self.is_selected(record.depth, child))
                    .unwrap_or(false)
            });
            self.set(parent.depth, parent_id.clone(), all_selected);
            cursor = parent.parent.clone();
        }
    }

    fn count_leaves(&self, taxonomy: &Taxonomy, id: &str) -> (usize, usize) {
        let Some(record) = taxonomy.record(id) else {
            return (0, 0);
        };
        if record.is_leaf() {
            let selected = usize::from(self.is_selected(record.depth, id));
            return (selected, 1);
        }
        let mut selected = 0;
        let mut total = 0;
        for child in &record.children {
            let (child_selected, child_total) = self.count_leaves(taxonomy, child);
            selected += child_selected;
            total += child_total;
        }
        (selected, total)
    }
}
