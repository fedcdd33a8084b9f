use dealmatch_core::{Taxonomy, TaxonomyError, TaxonomyNode, GEOGRAPHY_TIERS, INDUSTRY_TIERS};

fn geography_roots() -> Vec<TaxonomyNode> {
    vec![
        TaxonomyNode::branch(
            "na",
            "North America",
            vec![
                TaxonomyNode::leaf("us", "United States"),
                TaxonomyNode::leaf("ca", "Canada"),
            ],
        ),
        TaxonomyNode::branch(
            "eu",
            "Europe",
            vec![
                TaxonomyNode::branch(
                    "de",
                    "Germany",
                    vec![
                        TaxonomyNode::leaf("de-by", "Bavaria"),
                        TaxonomyNode::leaf("de-he", "Hesse"),
                    ],
                ),
                TaxonomyNode::leaf("fr", "France"),
            ],
        ),
    ]
}

#[test]
fn build_indexes_depth_parent_and_name_path() {
    let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, geography_roots()).unwrap();

    assert_eq!(taxonomy.tier_count(), 3);
    assert_eq!(taxonomy.node_count(), 8);
    assert_eq!(taxonomy.roots(), &["na".to_string(), "eu".to_string()]);

    let bavaria = taxonomy.record("de-by").unwrap();
    assert_eq!(bavaria.depth, 2);
    assert_eq!(bavaria.parent.as_deref(), Some("de"));
    assert_eq!(
        bavaria.name_path,
        vec![
            "Europe".to_string(),
            "Germany".to_string(),
            "Bavaria".to_string()
        ]
    );
    assert!(bavaria.is_leaf());

    let germany = taxonomy.record("de").unwrap();
    assert_eq!(
        germany.children,
        vec!["de-by".to_string(), "de-he".to_string()]
    );
}

#[test]
fn doc_order_lists_parents_before_children() {
    let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, geography_roots()).unwrap();

    let order = taxonomy.doc_order();
    assert_eq!(
        order,
        &[
            "na".to_string(),
            "us".to_string(),
            "ca".to_string(),
            "eu".to_string(),
            "de".to_string(),
            "de-by".to_string(),
            "de-he".to_string(),
            "fr".to_string(),
        ]
    );
}

#[test]
fn tier_depth_resolves_labels() {
    let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, geography_roots()).unwrap();

    assert_eq!(taxonomy.tier_depth("continent"), Some(0));
    assert_eq!(taxonomy.tier_depth("region"), Some(1));
    assert_eq!(taxonomy.tier_depth("sub_region"), Some(2));
    assert_eq!(taxonomy.tier_depth("galaxy"), None);
}

#[test]
fn nodes_named_returns_document_order_matches() {
    let roots = vec![
        TaxonomyNode::branch("eu", "Europe", vec![TaxonomyNode::leaf("ge", "Georgia")]),
        TaxonomyNode::branch("na", "North America", vec![TaxonomyNode::leaf("us-ga", "Georgia")]),
    ];
    let taxonomy = Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots).unwrap();

    assert_eq!(
        taxonomy.nodes_named("Georgia"),
        &["ge".to_string(), "us-ga".to_string()]
    );
    assert!(taxonomy.nodes_named("Atlantis").is_empty());
}

#[test]
fn duplicate_node_id_is_rejected() {
    let roots = vec![
        TaxonomyNode::leaf("x", "Alpha"),
        TaxonomyNode::leaf("x", "Beta"),
    ];
    let err = Taxonomy::new("industry", &INDUSTRY_TIERS, roots).unwrap_err();
    assert!(matches!(err, TaxonomyError::DuplicateNodeId(id) if id == "x"));
}

#[test]
fn too_deep_tree_is_rejected() {
    let roots = vec![TaxonomyNode::branch(
        "a",
        "A",
        vec![TaxonomyNode::branch(
            "b",
            "B",
            vec![TaxonomyNode::branch(
                "c",
                "C",
                vec![TaxonomyNode::leaf("d", "D")],
            )],
        )],
    )];
    let err = Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots).unwrap_err();
    assert!(matches!(
        err,
        TaxonomyError::DepthExceedsTiers {
            id,
            depth: 3,
            tier_count: 3,
        } if id == "d"
    ));
}

#[test]
fn blank_name_is_rejected() {
    let roots = vec![TaxonomyNode::leaf("x", "   ")];
    let err = Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots).unwrap_err();
    assert!(matches!(
        err,
        TaxonomyError::BlankNodeField { field: "name", id } if id == "x"
    ));
}

#[test]
fn empty_tier_list_is_rejected() {
    let err = Taxonomy::new("empty", &[], Vec::new()).unwrap_err();
    assert!(matches!(err, TaxonomyError::EmptyTierList));
}

#[test]
fn from_json_parses_children_defaulting_to_leaf() {
    let json = r#"[
        {
            "id": "na",
            "name": "North America",
            "children": [
                { "id": "us", "name": "United States" }
            ]
        }
    ]"#;
    let taxonomy = Taxonomy::from_json("geography", &GEOGRAPHY_TIERS, json).unwrap();

    assert_eq!(taxonomy.node_count(), 2);
    assert!(taxonomy.record("us").unwrap().is_leaf());
}

#[test]
fn from_json_rejects_malformed_payload() {
    let err = Taxonomy::from_json("geography", &GEOGRAPHY_TIERS, "{oops").unwrap_err();
    assert!(matches!(err, TaxonomyError::MalformedJson(_)));
}
