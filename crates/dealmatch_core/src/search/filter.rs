//! Substring tree filter.
//!
//! # Responsibility
//! - Prune taxonomy branches with no name match at any descendant level.
//!
//! # Invariants
//! - Matching is case-insensitive substring over display names.
//! - A node whose own name matches keeps its entire subtree.
//! - A blank term returns the input unchanged.

use crate::model::node::TaxonomyNode;

/// Returns a filtered copy of the tree for one search term.
///
/// A branch is retained when its own name matches or any descendant's name
/// matches; in the latter case its children are filtered recursively.
pub fn filter_tree(nodes: &[TaxonomyNode], term: &str) -> Vec<TaxonomyNode> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .filter_map(|node| filter_node(node, &needle))
        .collect()
}

fn filter_node(node: &TaxonomyNode, needle: &str) -> Option<TaxonomyNode> {
    if node.name.to_lowercase().contains(needle) {
        return Some(node.clone());
    }

    let children: Vec<TaxonomyNode> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, needle))
        .collect();
    if children.is_empty() {
        return None;
    }
    Some(TaxonomyNode {
        id: node.id.clone(),
        name: node.name.clone(),
        children,
    })
}
