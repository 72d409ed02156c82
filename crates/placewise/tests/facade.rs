#![allow(clippy::unwrap_used)]

use placewise::{evaluate_move, Decision, PlacementContext, RuleStore};

#[test]
fn facade_reexports_engine() {
    let store: RuleStore = [placewise::core::RestrictionRule::new()
        .when("region", "sidebar")
        .exclude(["video"])]
    .into_iter()
    .collect();

    let ctx = PlacementContext::new().with_region("sidebar");
    assert!(matches!(evaluate_move(&store, &ctx, "video"), Decision::Denied { .. }));
    assert_eq!(evaluate_move(&store, &ctx, "text"), Decision::Allowed);

    let cfg = placewise::cli::config::load_from_str("version: 1\n").unwrap();
    assert!(cfg.into_store().is_empty());
}
