use orrery_domain::category::UnitCategory;

#[test]
fn categories_are_processed_in_fixed_order() {
    let names: Vec<_> = UnitCategory::ORDERED.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        [
            "collections",
            "plugins",
            "shortcodes",
            "filters",
            "passthroughs",
            "watch_targets",
            "template_languages"
        ]
    );
}

#[test]
fn category_serializes_as_snake_case() {
    let raw = serde_json::to_string(&UnitCategory::WatchTargets).expect("serialize");
    assert_eq!(raw, "\"watch_targets\"");
}
