//! Indexed taxonomy snapshot.
//!
//! # Responsibility
//! - Flatten a provider tree into id-keyed records with depth/parent/path data.
//! - Validate structural constraints once, at construction.
//! - Resolve tier labels and display names for engine and paths layers.
//!
//! # Invariants
//! - Node ids are unique across the whole snapshot; duplicates are a build error.
//! - No node sits deeper than the tier list allows.
//! - `doc_order` contains every node exactly once, parents before children.
//! - Display-name collisions are tolerated but logged: name-keyed hydration
//!   and removal assume globally unique names.

use crate::model::node::{NodeId, TaxonomyNode};
use log::warn;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tier labels for the geography picker wired to buyer/seller forms.
pub const GEOGRAPHY_TIERS: [&str; 3] = ["continent", "region", "sub_region"];

/// Tier labels for the industry picker.
pub const INDUSTRY_TIERS: [&str; 5] = [
    "sector",
    "industry_group",
    "industry",
    "sub_industry",
    "activity",
];

/// Result type used by taxonomy construction.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Errors from taxonomy snapshot construction.
#[derive(Debug)]
pub enum TaxonomyError {
    /// Tier label list is empty.
    EmptyTierList,
    /// Node id or display name is blank after trim.
    BlankNodeField {
        field: &'static str,
        id: NodeId,
    },
    /// Same node id appears more than once in the tree.
    DuplicateNodeId(NodeId),
    /// Node sits deeper than the tier list allows.
    DepthExceedsTiers {
        id: NodeId,
        depth: usize,
        tier_count: usize,
    },
    /// Taxonomy JSON payload cannot be parsed.
    MalformedJson(serde_json::Error),
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTierList => write!(f, "taxonomy requires at least one tier label"),
            Self::BlankNodeField { field, id } => {
                write!(f, "taxonomy node has blank {field}: `{id}`")
            }
            Self::DuplicateNodeId(id) => write!(f, "duplicate taxonomy node id: {id}"),
            Self::DepthExceedsTiers {
                id,
                depth,
                tier_count,
            } => write!(
                f,
                "taxonomy node {id} at depth {depth} exceeds {tier_count} configured tiers"
            ),
            Self::MalformedJson(err) => write!(f, "malformed taxonomy JSON: {err}"),
        }
    }
}

impl Error for TaxonomyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedJson(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TaxonomyError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedJson(value)
    }
}

/// Flattened read model for one taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Stable node id.
    pub id: NodeId,
    /// Display name; unit of path serialization.
    pub name: String,
    /// Zero-based tier depth (0 = root tier).
    pub depth: usize,
    /// Parent node id. `None` for root-tier nodes.
    pub parent: Option<NodeId>,
    /// Ordered child ids.
    pub children: Vec<NodeId>,
    /// Display names from the root tier down to this node, inclusive.
    pub name_path: Vec<String>,
}

impl NodeRecord {
    /// Returns whether this record has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable, indexed taxonomy snapshot.
///
/// Built once per session from provider reference data; every engine and
/// serialization operation reads through this index.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    label: String,
    tiers: Vec<String>,
    roots: Vec<NodeId>,
    doc_order: Vec<NodeId>,
    index: HashMap<NodeId, NodeRecord>,
    by_name: HashMap<String, Vec<NodeId>>,
    tree: Vec<TaxonomyNode>,
}

impl Taxonomy {
    /// Builds an indexed snapshot from root nodes and tier labels.
    ///
    /// # Errors
    /// - [`TaxonomyError::EmptyTierList`] when no tier label is given.
    /// - [`TaxonomyError::BlankNodeField`] for blank ids or names.
    /// - [`TaxonomyError::DuplicateNodeId`] when an id repeats anywhere.
    /// - [`TaxonomyError::DepthExceedsTiers`] when the tree is too deep.
    pub fn new(
        label: impl Into<String>,
        tiers: &[&str],
        roots: Vec<TaxonomyNode>,
    ) -> TaxonomyResult<Self> {
        if tiers.is_empty() {
            return Err(TaxonomyError::EmptyTierList);
        }

        let label = label.into();
        let tiers: Vec<String> = tiers.iter().map(|tier| tier.to_string()).collect();

        let mut doc_order = Vec::new();
        let mut index = HashMap::new();
        let mut by_name: HashMap<String, Vec<NodeId>> = HashMap::new();
        for root in &roots {
            flatten(
                root,
                0,
                None,
                &[],
                tiers.len(),
                &mut doc_order,
                &mut index,
                &mut by_name,
            )?;
        }

        for (name, ids) in &by_name {
            if ids.len() > 1 {
                // Name-keyed hydration assumes global uniqueness; see paths layer.
                warn!(
                    "event=taxonomy_build module=model status=warn taxonomy={} reason=duplicate_name name={} count={}",
                    label,
                    name,
                    ids.len()
                );
            }
        }

        Ok(Self {
            label,
            tiers,
            roots: roots.iter().map(|node| node.id.clone()).collect(),
            doc_order,
            index,
            by_name,
            tree: roots,
        })
    }

    /// Builds a snapshot from a JSON array of root nodes.
    pub fn from_json(
        label: impl Into<String>,
        tiers: &[&str],
        json: &str,
    ) -> TaxonomyResult<Self> {
        let roots: Vec<TaxonomyNode> = serde_json::from_str(json)?;
        Self::new(label, tiers, roots)
    }

    /// Snapshot label used in diagnostics (`geography`, `industry`, ...).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tier labels, root tier first.
    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    /// Number of tiers this snapshot allows.
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Resolves one tier label to its zero-based depth.
    pub fn tier_depth(&self, tier: &str) -> Option<usize> {
        self.tiers.iter().position(|label| label == tier)
    }

    /// Root-tier node ids in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All node ids in document order, parents before children.
    pub fn doc_order(&self) -> &[NodeId] {
        &self.doc_order
    }

    /// Total node count across all tiers.
    pub fn node_count(&self) -> usize {
        self.doc_order.len()
    }

    /// Looks up one flattened record.
    pub fn record(&self, id: &str) -> Option<&NodeRecord> {
        self.index.get(id)
    }

    /// Nodes whose display name matches exactly, in document order.
    pub fn nodes_named(&self, name: &str) -> &[NodeId] {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Original nested tree, e.g. for filtered render views.
    pub fn tree(&self) -> &[TaxonomyNode] {
        &self.tree
    }
}

#[allow(clippy::too_many_arguments)]
fn flatten(
    node: &TaxonomyNode,
    depth: usize,
    parent: Option<&NodeId>,
    parent_path: &[String],
    tier_count: usize,
    doc_order: &mut Vec<NodeId>,
    index: &mut HashMap<NodeId, NodeRecord>,
    by_name: &mut HashMap<String, Vec<NodeId>>,
) -> TaxonomyResult<()> {
    if node.id.trim().is_empty() {
        return Err(TaxonomyError::BlankNodeField {
            field: "id",
            id: node.name.clone(),
        });
    }
    if node.name.trim().is_empty() {
        return Err(TaxonomyError::BlankNodeField {
            field: "name",
            id: node.id.clone(),
        });
    }
    if depth >= tier_count {
        return Err(TaxonomyError::DepthExceedsTiers {
            id: node.id.clone(),
            depth,
            tier_count,
        });
    }
    if index.contains_key(&node.id) {
        return Err(TaxonomyError::DuplicateNodeId(node.id.clone()));
    }

    let mut name_path = parent_path.to_vec();
    name_path.push(node.name.clone());

    doc_order.push(node.id.clone());
    by_name
        .entry(node.name.clone())
        .or_default()
        .push(node.id.clone());
    index.insert(
        node.id.clone(),
        NodeRecord {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            parent: parent.cloned(),
            children: node.children.iter().map(|child| child.id.clone()).collect(),
            name_path: name_path.clone(),
        },
    );

    for child in &node.children {
        flatten(
            child,
            depth + 1,
            Some(&node.id),
            &name_path,
            tier_count,
            doc_order,
            index,
            by_name,
        )?;
    }
    Ok(())
}
