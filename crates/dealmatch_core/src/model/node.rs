//! Raw taxonomy node shape.
//!
//! # Responsibility
//! - Mirror the reference-data payload delivered by the taxonomy provider.
//! - Stay a plain data carrier; derived lookups live in [`crate::model::taxonomy`].
//!
//! # Invariants
//! - `id` is stable for the lifetime of one taxonomy snapshot.
//! - `children` ordering is document order and is preserved everywhere.

use serde::{Deserialize, Serialize};

/// Stable identifier for one taxonomy node.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids come from the external reference-data provider and are opaque here.
pub type NodeId = String;

/// One node of an externally-supplied taxonomy tree.
///
/// Geography trees are three tiers deep (continent/region/sub-region),
/// industry trees up to five (sector/group/industry/sub-industry/activity).
/// The model does not care: depth limits are enforced per snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyNode {
    /// Stable provider-assigned id.
    pub id: NodeId,
    /// User-facing display name; also the unit of path serialization.
    pub name: String,
    /// Child nodes in document order. Absent in JSON means leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    /// Creates a leaf node.
    pub fn leaf(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Creates a branch node with ordered children.
    pub fn branch(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        children: Vec<TaxonomyNode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
