use catalog_query::filter::{FilterAction, FilterState};
use pretty_assertions::assert_eq;

fn selected(state: &FilterState, facet: &str) -> Vec<String> {
    state
        .selection(facet)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn new_state_seeds_known_facets() {
    let state = FilterState::new();
    assert_eq!(state.query, "");
    assert_eq!(
        state.selections.keys().cloned().collect::<Vec<_>>(),
        vec!["campus", "language", "topic"]
    );
    assert_eq!(state.active_filter_count(), 0);
    assert!(!state.has_active_filters());
}

#[test]
fn transitions_do_not_touch_the_original() {
    let before = FilterState::new().set_query("ml");
    let after = before.toggle_option("campus", "UC Davis").set_query("robotics");

    assert_eq!(before.query, "ml");
    assert!(selected(&before, "campus").is_empty());
    assert_eq!(after.query, "robotics");
    assert_eq!(selected(&after, "campus"), vec!["UC Davis"]);
}

#[test]
fn set_query_is_verbatim() {
    let state = FilterState::new().set_query("  Rust  ");
    assert_eq!(state.query, "  Rust  ");
}

#[test]
fn toggle_option_adds_then_removes() {
    let state = FilterState::new().toggle_option("language", "Go");
    assert!(state.is_selected("language", "Go"));

    let state = state.toggle_option("language", "Go");
    assert!(!state.is_selected("language", "Go"));
    assert!(selected(&state, "language").is_empty());
}

#[test]
fn toggle_option_creates_missing_facet() {
    let state = FilterState::default().toggle_option("bogus", "x");
    assert_eq!(selected(&state, "bogus"), vec!["x"]);
}

#[test]
fn toggle_all_selects_then_clears() {
    let domain = ["A", "B", "C"];

    let state = FilterState::new().toggle_option("topic", "B");
    let state = state.toggle_all("topic", &domain);
    assert_eq!(selected(&state, "topic"), vec!["A", "B", "C"]);
    assert!(state.is_fully_selected("topic", domain.len()));

    let state = state.toggle_all("topic", &domain);
    assert!(selected(&state, "topic").is_empty());
    assert!(!state.is_fully_selected("topic", domain.len()));
}

#[test]
fn toggle_all_compares_cardinality_not_membership() {
    // Three selected labels, none from the domain, still count as "all"
    let domain = ["A", "B", "C"];
    let state = FilterState::new()
        .toggle_option("topic", "X")
        .toggle_option("topic", "Y")
        .toggle_option("topic", "Z");

    assert!(state.is_fully_selected("topic", domain.len()));
    let state = state.toggle_all("topic", &domain);
    assert!(selected(&state, "topic").is_empty());
}

#[test]
fn clear_all_keeps_query() {
    let state = FilterState::new()
        .set_query("data")
        .toggle_option("campus", "UC Davis")
        .toggle_option("language", "Rust")
        .toggle_option("bogus", "x");

    let cleared = state.clear_all();
    assert_eq!(cleared.query, "data");
    assert_eq!(cleared.active_filter_count(), 0);
    assert!(cleared.selections.values().all(|set| set.is_empty()));
}

#[test]
fn clear_facet_option_removes_one_chip() {
    let state = FilterState::new()
        .toggle_option("language", "Rust")
        .toggle_option("language", "Go")
        .toggle_option("topic", "IoT");

    let state = state.clear_facet_option("language", "Rust");
    assert_eq!(selected(&state, "language"), vec!["Go"]);
    assert_eq!(selected(&state, "topic"), vec!["IoT"]);

    // Missing facet or option is a no-op
    let unchanged = state.clear_facet_option("nope", "x").clear_facet_option("topic", "absent");
    assert_eq!(unchanged, state);
}

#[test]
fn active_filters_lists_chips_in_facet_order() {
    let state = FilterState::new()
        .toggle_option("topic", "IoT")
        .toggle_option("campus", "UC Davis")
        .toggle_option("language", "Rust")
        .toggle_option("language", "C");

    assert_eq!(state.active_filter_count(), 4);
    assert_eq!(
        state.active_filters(),
        vec![
            ("campus", "UC Davis"),
            ("language", "C"),
            ("language", "Rust"),
            ("topic", "IoT"),
        ]
    );
}

#[test]
fn apply_dispatches_each_action() {
    let actions = vec![
        FilterAction::SetQuery { text: "vision".into() },
        FilterAction::ToggleOption { facet: "campus".into(), option: "UC Davis".into() },
        FilterAction::SetSelection { facet: "language".into(), options: vec!["Go".into(), "C".into()] },
        FilterAction::ClearFacetOption { facet: "language".into(), option: "C".into() },
        FilterAction::ToggleAll { facet: "topic".into(), all_options: vec!["IoT".into(), "API".into()] },
    ];

    let state = actions
        .iter()
        .fold(FilterState::new(), |state, action| state.apply(action));

    assert_eq!(state.query, "vision");
    assert_eq!(selected(&state, "campus"), vec!["UC Davis"]);
    assert_eq!(selected(&state, "language"), vec!["Go"]);
    assert_eq!(selected(&state, "topic"), vec!["API", "IoT"]);

    let cleared = state.apply(&FilterAction::ClearAll);
    assert_eq!(cleared.query, "vision");
    assert_eq!(cleared.active_filter_count(), 0);
}

#[test]
fn actions_deserialize_from_tagged_json() {
    let action: FilterAction = serde_json::from_str(
        r#"{"action":"toggle_option","facet":"language","option":"Rust"}"#,
    )
    .unwrap();

    assert_eq!(
        action,
        FilterAction::ToggleOption {
            facet: "language".into(),
            option: "Rust".into()
        }
    );

    let clear: FilterAction = serde_json::from_str(r#"{"action":"clear_all"}"#).unwrap();
    assert_eq!(clear, FilterAction::ClearAll);
}
