use dealmatch_core::{PickerSession, SelectionFlag, SelectionMode, TaxonomyNode};

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

fn industry_roots() -> Vec<TaxonomyNode> {
    vec![TaxonomyNode::branch(
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
    )]
}

#[test]
fn cascading_session_serializes_through_facade() {
    let mut session = PickerSession::geography(geography_roots()).unwrap();
    assert_eq!(session.mode(), SelectionMode::CascadingMulti);

    session.toggle("region", "us");
    session.toggle("sub_region", "de-by");

    assert_eq!(
        session.selected_paths(),
        vec!["United States".to_string(), "Germany > Bavaria".to_string()]
    );
    assert_eq!(session.flag("na"), SelectionFlag::Mixed);
}

#[test]
fn industry_session_uses_bare_names() {
    let mut session = PickerSession::industry(industry_roots()).unwrap();

    session.toggle("industry", "saas");
    assert_eq!(session.selected_paths(), vec!["SaaS".to_string()]);

    session.toggle("industry", "onprem");
    assert_eq!(session.selected_paths(), vec!["Tech".to_string()]);
}

#[test]
fn session_hydrate_and_remove_round_trip() {
    let mut session = PickerSession::geography(geography_roots()).unwrap();

    let applied = session.hydrate(&["Germany".to_string(), "Atlantis".to_string()]);
    assert_eq!(applied, 1);
    assert_eq!(session.selected_paths(), vec!["Germany".to_string()]);

    session.remove_path("Germany");
    assert!(session.selected_paths().is_empty());
}

#[test]
fn select_all_and_clear_all_cover_whole_tree() {
    let mut session = PickerSession::geography(geography_roots()).unwrap();

    session.select_all();
    assert_eq!(
        session.selected_paths(),
        vec!["North America".to_string(), "Europe".to_string()]
    );

    session.clear_all();
    assert!(session.selected_paths().is_empty());
}

#[test]
fn single_mode_keeps_exactly_one_pick() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();
    assert_eq!(session.mode(), SelectionMode::Single);

    session.toggle("region", "us");
    assert_eq!(session.selected_paths(), vec!["United States".to_string()]);
    assert_eq!(session.flag("us"), SelectionFlag::Selected);

    // Picking another node replaces the previous pick, no cascade.
    session.toggle("region", "fr");
    assert_eq!(session.selected_paths(), vec!["France".to_string()]);
    assert_eq!(session.flag("us"), SelectionFlag::Unselected);
}

#[test]
fn single_mode_toggle_on_picked_node_clears_it() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();

    session.toggle("region", "us");
    session.toggle("region", "us");

    assert!(session.selected_paths().is_empty());
    assert_eq!(session.flag("us"), SelectionFlag::Unselected);
}

#[test]
fn single_mode_does_not_cascade_into_descendants() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();

    session.toggle("continent", "eu");

    assert_eq!(session.selected_paths(), vec!["Europe".to_string()]);
    assert_eq!(session.flag("de"), SelectionFlag::Unselected);
    assert!(session.selected_leaves().is_empty());
}

#[test]
fn single_mode_select_all_is_a_no_op() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();

    session.select_all();

    assert!(session.selected_paths().is_empty());
}

#[test]
fn single_mode_hydrate_takes_first_resolvable_path() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();

    let applied = session.hydrate(&[
        "Atlantis".to_string(),
        "Germany > Bavaria".to_string(),
        "Canada".to_string(),
    ]);

    assert_eq!(applied, 1);
    assert_eq!(
        session.selected_paths(),
        vec!["Germany > Bavaria".to_string()]
    );
}

#[test]
fn single_mode_remove_path_clears_matching_pick_only() {
    let mut session = PickerSession::geography_single(geography_roots()).unwrap();

    session.toggle("region", "ca");
    session.remove_path("United States");
    assert_eq!(session.selected_paths(), vec!["Canada".to_string()]);

    session.remove_path("Canada");
    assert!(session.selected_paths().is_empty());
}

#[test]
fn filtered_tree_leaves_selection_untouched() {
    let mut session = PickerSession::geography(geography_roots()).unwrap();
    session.toggle("region", "us");

    let view = session.filtered_tree("germany");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "eu");

    assert_eq!(session.selected_paths(), vec!["United States".to_string()]);
}

#[test]
fn sessions_get_distinct_ids() {
    let a = PickerSession::geography(geography_roots()).unwrap();
    let b = PickerSession::geography(geography_roots()).unwrap();

    assert_ne!(a.session_id(), b.session_id());
}
