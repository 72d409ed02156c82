//! Policy engine scenario vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use placewise_core::{evaluate_move, filter_allowed_types};

use vector_loader::load;

const VECTORS: &[&str] = &[
    "scenario_a_no_rules.json",
    "scenario_b_excluded.json",
    "scenario_c_palette.json",
    "scenario_d_wildcard_transform.json",
    "scenario_e_negated_match.json",
    "scenario_e_negated_miss.json",
    "transform_beats_denial.json",
    "excluded_target_skipped.json",
    "layout_region_key.json",
    "empty_region_defaults_root.json",
];

#[test]
fn scenario_vectors() {
    for f in VECTORS {
        let v = load(f);
        let store = v.store();
        let mut checked = false;

        if let (Some(candidates), Some(expected)) = (&v.candidates, &v.expect_allowed) {
            let allowed: Vec<String> = filter_allowed_types(&store, &v.context, candidates)
                .into_iter()
                .collect();
            assert_eq!(&allowed, expected, "vector={}", v.description);
            checked = true;
        }

        if let (Some(moved), Some(expected)) = (&v.moved_type, &v.expect_decision) {
            let decision = evaluate_move(&store, &v.context, moved);
            let got = serde_json::to_value(&decision).unwrap();
            assert_eq!(&got, expected, "vector={}", v.description);
            checked = true;
        }

        assert!(checked, "vector={} has no expectations", v.description);
    }
}
