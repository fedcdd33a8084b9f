//! Picker session facade.
//!
//! # Responsibility
//! - Own one taxonomy snapshot plus one selection state per mounted form.
//! - Dispatch operations by cardinality mode (single vs cascading multi).
//! - Expose the full picker API surface: toggle, bulk ops, paths,
//!   hydration, removal, render flags, and filtered views.
//!
//! # Invariants
//! - State lives and dies with the session; nothing is persisted locally.
//! - `Single` mode holds at most one selected node at any time, with no
//!   cascade; `CascadingMulti` delegates to the propagation engine.
//! - Serialized output is always regenerable from current state.

use crate::engine::state::{SelectionFlag, SelectionState};
use crate::model::node::{NodeId, TaxonomyNode};
use crate::model::taxonomy::{
    Taxonomy, TaxonomyResult, GEOGRAPHY_TIERS, INDUSTRY_TIERS,
};
use crate::paths::hydrate::{hydrate, remove_path, resolve_path};
use crate::paths::serialize::{display_path, selected_paths, PathStyle};
use crate::search::filter::filter_tree;
use log::{debug, info, warn};
use uuid::Uuid;

/// Selection cardinality for one picker instance.
///
/// Both shipped pickers render from the same tree component; the deal-level
/// forms use radio semantics while the buyer-criteria forms cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Mutually exclusive pick: at most one node selected, no cascade.
    Single,
    /// Checkbox semantics with downward cascade and upward recompute.
    CascadingMulti,
}

impl SelectionMode {
    fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::CascadingMulti => "cascading_multi",
        }
    }
}

/// One mounted picker form: taxonomy, state, mode, and path style.
#[derive(Debug)]
pub struct PickerSession {
    session_id: Uuid,
    taxonomy: Taxonomy,
    state: SelectionState,
    mode: SelectionMode,
    style: PathStyle,
    single_pick: Option<NodeId>,
}

impl PickerSession {
    /// Creates a session over an already-built taxonomy snapshot.
    pub fn new(taxonomy: Taxonomy, mode: SelectionMode, style: PathStyle) -> Self {
        let state = SelectionState::for_taxonomy(&taxonomy);
        let session_id = Uuid::new_v4();
        info!(
            "event=picker_open module=service status=ok session={session_id} taxonomy={} mode={} tiers={} nodes={}",
            taxonomy.label(),
            mode.label(),
            taxonomy.tier_count(),
            taxonomy.node_count()
        );
        Self {
            session_id,
            taxonomy,
            state,
            mode,
            style,
            single_pick: None,
        }
    }

    /// Cascading geography picker (continent/region/sub-region, joined paths).
    pub fn geography(roots: Vec<TaxonomyNode>) -> TaxonomyResult<Self> {
        let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots)?;
        Ok(Self::new(
            taxonomy,
            SelectionMode::CascadingMulti,
            PathStyle::Joined,
        ))
    }

    /// Single-select geography picker used by deal-level forms.
    pub fn geography_single(roots: Vec<TaxonomyNode>) -> TaxonomyResult<Self> {
        let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots)?;
        Ok(Self::new(taxonomy, SelectionMode::Single, PathStyle::Joined))
    }

    /// Cascading industry picker (sector through activity, bare names).
    pub fn industry(roots: Vec<TaxonomyNode>) -> TaxonomyResult<Self> {
        let taxonomy = Taxonomy::new("industry", &INDUSTRY_TIERS, roots)?;
        Ok(Self::new(
            taxonomy,
            SelectionMode::CascadingMulti,
            PathStyle::Bare,
        ))
    }

    /// Single-select industry picker used by deal-level forms.
    pub fn industry_single(roots: Vec<TaxonomyNode>) -> TaxonomyResult<Self> {
        let taxonomy = Taxonomy::new("industry", &INDUSTRY_TIERS, roots)?;
        Ok(Self::new(taxonomy, SelectionMode::Single, PathStyle::Bare))
    }

    /// Session id used in diagnostics.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Taxonomy snapshot this session selects against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Selection cardinality mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Path formatting style.
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Applies one user toggle.
    ///
    /// `CascadingMulti` delegates to the propagation engine. `Single` picks
    /// the node exclusively, or clears it when it was already picked.
    pub fn toggle(&mut self, tier: &str, node_id: &str) {
        match self.mode {
            SelectionMode::CascadingMulti => self.state.toggle(&self.taxonomy, tier, node_id),
            SelectionMode::Single => self.toggle_single(tier, node_id),
        }
    }

    /// Selects every node. Logged no-op in single mode.
    pub fn select_all(&mut self) {
        match self.mode {
            SelectionMode::CascadingMulti => self.state.select_all(&self.taxonomy),
            SelectionMode::Single => {
                warn!(
                    "event=picker_select_all module=service status=skip session={} reason=single_mode",
                    self.session_id
                );
            }
        }
    }

    /// Clears every node.
    pub fn clear_all(&mut self) {
        self.state.clear_all();
        self.single_pick = None;
    }

    /// Serializes current state into backend path strings.
    pub fn selected_paths(&self) -> Vec<String> {
        match self.mode {
            SelectionMode::CascadingMulti => {
                selected_paths(&self.taxonomy, &self.state, self.style)
            }
            SelectionMode::Single => self
                .single_pick
                .as_deref()
                .and_then(|id| self.taxonomy.record(id))
                .map(|record| vec![display_path(record, self.style)])
                .unwrap_or_default(),
        }
    }

    /// Loads previously persisted path strings into this session.
    ///
    /// Stale strings are skipped. In single mode the first resolvable
    /// string wins and the rest are ignored. Returns how many applied.
    pub fn hydrate(&mut self, paths: &[String]) -> usize {
        match self.mode {
            SelectionMode::CascadingMulti => hydrate(&self.taxonomy, &mut self.state, paths),
            SelectionMode::Single => {
                for path in paths {
                    if let Some(id) = resolve_path(&self.taxonomy, path) {
                        self.pick_exclusive(&id);
                        return 1;
                    }
                }
                0
            }
        }
    }

    /// Deselects the node behind one previously-emitted path string.
    pub fn remove_path(&mut self, path: &str) {
        match self.mode {
            SelectionMode::CascadingMulti => {
                remove_path(&self.taxonomy, &mut self.state, path);
            }
            SelectionMode::Single => {
                let picked = self
                    .single_pick
                    .as_deref()
                    .and_then(|id| self.taxonomy.record(id))
                    .map(|record| display_path(record, self.style) == path)
                    .unwrap_or(false);
                if picked {
                    self.clear_all();
                }
            }
        }
    }

    /// Derived render condition for one node's checkbox.
    pub fn flag(&self, node_id: &str) -> SelectionFlag {
        match self.mode {
            SelectionMode::CascadingMulti => self.state.flag(&self.taxonomy, node_id),
            SelectionMode::Single => {
                if self.single_pick.as_deref() == Some(node_id) {
                    SelectionFlag::Selected
                } else {
                    SelectionFlag::Unselected
                }
            }
        }
    }

    /// Selected leaf ids in document order (cascading mode membership).
    pub fn selected_leaves(&self) -> Vec<NodeId> {
        self.state.selected_leaves(&self.taxonomy)
    }

    /// Filtered tree view for a search term. State is untouched.
    pub fn filtered_tree(&self, term: &str) -> Vec<TaxonomyNode> {
        filter_tree(self.taxonomy.tree(), term)
    }

    fn toggle_single(&mut self, tier: &str, node_id: &str) {
        let Some(depth) = self.taxonomy.tier_depth(tier) else {
            warn!(
                "event=picker_toggle module=service status=skip session={} reason=unknown_tier tier={tier}",
                self.session_id
            );
            return;
        };
        let Some(record) = self.taxonomy.record(node_id) else {
            warn!(
                "event=picker_toggle module=service status=skip session={} reason=unknown_node node={node_id}",
                self.session_id
            );
            return;
        };
        if record.depth != depth {
            warn!(
                "event=picker_toggle module=service status=skip session={} reason=tier_mismatch node={node_id} tier={tier}",
                self.session_id
            );
            return;
        }

        if self.single_pick.as_deref() == Some(node_id) {
            self.clear_all();
        } else {
            self.pick_exclusive(node_id);
        }
        debug!(
            "event=picker_toggle module=service status=ok session={} mode=single node={node_id}",
            self.session_id
        );
    }

    fn pick_exclusive(&mut self, node_id: &str) {
        let Some(record) = self.taxonomy.record(node_id) else {
            return;
        };
        let depth = record.depth;
        self.state.clear_all();
        self.state.set(depth, node_id.to_string(), true);
        self.single_pick = Some(node_id.to_string());
    }
}
