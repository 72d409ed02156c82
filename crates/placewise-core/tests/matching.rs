#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use placewise_core::policy::matches;
use placewise_core::{
    applicable_rules, CompiledRule, Matcher, PlacementContext, RestrictionRule, RuleStore,
    TransformPattern,
};

fn compiled(rule: RestrictionRule) -> CompiledRule {
    CompiledRule::compile(0, &rule).0
}

#[test]
fn empty_predicate_never_matches() {
    let rule = compiled(RestrictionRule::new().allow(["text"]));
    let ctx = PlacementContext::new()
        .with_region("sidebar")
        .with_layout("two_col")
        .with_parent_type("grid");
    assert!(!matches(rule.predicate(), &ctx));
    assert!(!matches(rule.predicate(), &PlacementContext::new()));
}

#[test]
fn literal_and_negated_truth_table() {
    assert!(Matcher::parse("grid").holds(Some("grid")));
    assert!(!Matcher::parse("grid").holds(Some("section")));
    assert!(!Matcher::parse("grid").holds(None));

    assert!(Matcher::parse("!section").holds(Some("grid")));
    assert!(!Matcher::parse("!section").holds(Some("section")));
    assert!(!Matcher::parse("!section").holds(None));
}

#[test]
fn malformed_matchers_are_inert() {
    assert!(Matcher::parse("").is_inert());
    assert!(Matcher::parse("!").is_inert());
    assert!(!Matcher::parse("!").holds(Some("")));
    assert!(!Matcher::parse("!").holds(Some("anything")));
    assert_eq!(Matcher::parse("!!x"), Matcher::NotEquals("!x".into()));
}

#[test]
fn predicate_keys_are_alternatives() {
    let rule = compiled(
        RestrictionRule::new()
            .when("region", "sidebar")
            .when("layout", "two_col"),
    );

    let only_region = PlacementContext::new().with_region("sidebar");
    let only_layout = PlacementContext::new().with_layout("two_col").with_region("main");
    let neither = PlacementContext::new().with_region("main").with_layout("one_col");

    assert!(matches(rule.predicate(), &only_region));
    assert!(matches(rule.predicate(), &only_layout));
    assert!(!matches(rule.predicate(), &neither));
}

#[test]
fn unknown_and_missing_attributes_are_inert() {
    let rule = compiled(RestrictionRule::new().when("bundle", "!node:page"));
    assert!(!matches(rule.predicate(), &PlacementContext::new()));

    let ctx = PlacementContext::new().with_attr("bundle", "node:article");
    assert!(matches(rule.predicate(), &ctx));
}

#[test]
fn region_defaults_to_root() {
    let rule = compiled(RestrictionRule::new().when("region", "_root"));
    assert!(matches(rule.predicate(), &PlacementContext::new()));
    assert!(matches(rule.predicate(), &PlacementContext::new().with_region("")));
    assert!(!matches(rule.predicate(), &PlacementContext::new().with_region("left")));
}

#[test]
fn placement_attribute_matches_by_name() {
    let rule = compiled(RestrictionRule::new().when("placement", "before"));
    let before: PlacementContext = [("placement", "before")].into_iter().collect();
    let bogus: PlacementContext = [("placement", "above")].into_iter().collect();
    assert!(matches(rule.predicate(), &before));
    assert!(!matches(rule.predicate(), &bogus));
}

#[test]
fn transform_patterns() {
    assert!(TransformPattern::parse("card").matches("card"));
    assert!(!TransformPattern::parse("card").matches("card_basic"));
    assert!(TransformPattern::parse("card*").matches("card_basic"));
    assert!(TransformPattern::parse("card*").matches("card"));
    assert!(!TransformPattern::parse("card*").matches("hero_card"));

    // A bare wildcard is an empty prefix.
    assert!(TransformPattern::parse("*").matches("anything"));

    for bad in ["", "*card", "ca*rd", "card**", "*card*"] {
        let p = TransformPattern::parse(bad);
        assert!(p.is_inert(), "pattern={bad}");
        assert!(!p.matches("card"), "pattern={bad}");
    }
}

#[test]
fn applicable_rules_keep_store_order() {
    let store = RuleStore::compile(vec![
        RestrictionRule::new().named("a").when("region", "left"),
        RestrictionRule::new().named("b").when("region", "right"),
        RestrictionRule::new().named("c").when("layout", "!one_col"),
        RestrictionRule::new().named("d").when("region", "left"),
    ]);
    let ctx = PlacementContext::new().with_region("left").with_layout("two_col");

    let names: Vec<_> = applicable_rules(&store, &ctx)
        .iter()
        .map(|r| r.name().unwrap())
        .collect();
    assert_eq!(names, ["a", "c", "d"]);
}

#[test]
fn compile_reports_inert_entries() {
    let store = RuleStore::compile(vec![
        RestrictionRule::new()
            .named("bad")
            .when("region", "!")
            .transform("*card*", "card--wide")
            .transform("hero", ""),
        RestrictionRule::new().when("layout", "two_col"),
    ]);

    let entries: Vec<_> = store.diagnostics().iter().map(|d| d.entry.as_str()).collect();
    assert_eq!(entries, ["context.region", "transform.*card*", "transform.hero"]);
    assert!(store.diagnostics().iter().all(|d| d.rule == "bad"));
    assert_eq!(store.len(), 2);
}
