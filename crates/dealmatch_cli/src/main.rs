//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dealmatch_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use dealmatch_core::{PickerSession, TaxonomyNode};

fn main() {
    println!("dealmatch_core ping={}", dealmatch_core::ping());
    println!("dealmatch_core version={}", dealmatch_core::core_version());

    // Tiny built-in tree exercising one toggle end to end.
    let roots = vec![TaxonomyNode::branch(
        "na",
        "North America",
        vec![
            TaxonomyNode::leaf("us", "United States"),
            TaxonomyNode::leaf("ca", "Canada"),
        ],
    )];
    let mut session = PickerSession::geography(roots).expect("built-in tree is valid");
    session.toggle("region", "us");
    println!("dealmatch_core paths={:?}", session.selected_paths());
}
