use dealmatch_core::{
    selected_paths, PathStyle, SelectionState, Taxonomy, TaxonomyNode, GEOGRAPHY_TIERS,
    INDUSTRY_TIERS,
};

fn geography() -> Taxonomy {
    let roots = vec![
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
    ];
    Taxonomy::new("geography", &GEOGRAPHY_TIERS, roots).unwrap()
}

fn industry() -> Taxonomy {
    let roots = vec![
        TaxonomyNode::branch(
            "tech",
            "Tech",
            vec![TaxonomyNode::branch(
                "software",
                "Software",
                vec![
                    TaxonomyNode::leaf("saas", "SaaS"),
                    TaxonomyNode::leaf("onprem", "On-Premise"),
                ],
            )],
        ),
        TaxonomyNode::branch(
            "energy",
            "Energy",
            vec![TaxonomyNode::branch(
                "renewables",
                "Renewables",
                vec![TaxonomyNode::leaf("solar", "Solar")],
            )],
        ),
    ];
    Taxonomy::new("industry", &INDUSTRY_TIERS, roots).unwrap()
}

#[test]
fn single_selected_region_emits_bare_name() {
    // Scenario: North America has United States and Canada; only the United
    // States is selected, so the continent itself is not emitted.
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "region", "us");

    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Joined),
        vec!["United States".to_string()]
    );
}

#[test]
fn fully_selected_branch_collapses_to_one_string() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "continent", "eu");

    let paths = selected_paths(&taxonomy, &state, PathStyle::Joined);
    assert_eq!(paths, vec!["Europe".to_string()]);
    assert!(!paths.iter().any(|path| path.contains("Germany")));
}

#[test]
fn sub_region_emits_joined_path_without_continent() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "sub_region", "de-by");

    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Joined),
        vec!["Germany > Bavaria".to_string()]
    );
}

#[test]
fn fully_selected_region_collapses_below_mixed_continent() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "sub_region", "de-by");
    state.toggle(&taxonomy, "sub_region", "de-he");

    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Joined),
        vec!["Germany".to_string()]
    );
}

#[test]
fn industry_style_emits_bare_names_at_any_depth() {
    // Scenario: toggling SaaS alone emits just "SaaS"; selecting its sibling
    // as well collapses all the way up to "Tech".
    let taxonomy = industry();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "industry", "saas");
    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Bare),
        vec!["SaaS".to_string()]
    );

    state.toggle(&taxonomy, "industry", "onprem");
    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Bare),
        vec!["Tech".to_string()]
    );
}

#[test]
fn output_follows_document_order() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "region", "fr");
    state.toggle(&taxonomy, "region", "us");

    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Joined),
        vec!["United States".to_string(), "France".to_string()]
    );
}

#[test]
fn serialize_is_idempotent_without_mutation() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.toggle(&taxonomy, "region", "de");
    state.toggle(&taxonomy, "region", "us");

    let first = selected_paths(&taxonomy, &state, PathStyle::Joined);
    let second = selected_paths(&taxonomy, &state, PathStyle::Joined);
    assert_eq!(first, second);
}

#[test]
fn empty_state_serializes_to_empty_list() {
    let taxonomy = geography();
    let state = SelectionState::for_taxonomy(&taxonomy);

    assert!(selected_paths(&taxonomy, &state, PathStyle::Joined).is_empty());
}

#[test]
fn select_all_collapses_to_root_names() {
    let taxonomy = geography();
    let mut state = SelectionState::for_taxonomy(&taxonomy);

    state.select_all(&taxonomy);

    assert_eq!(
        selected_paths(&taxonomy, &state, PathStyle::Joined),
        vec!["North America".to_string(), "Europe".to_string()]
    );
}
