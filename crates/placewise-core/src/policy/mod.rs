//! Policy layer: rule matching and decision resolution.
//!
//! Every function here is pure: the rule store and context are passed in
//! explicitly, so evaluations can run concurrently against a shared store.

pub mod engine;
pub mod matcher;

pub use engine::{
    applicable_rules, evaluate_move, filter_allowed_types, resolve_transform, resolve_types,
    PolicyEngine, TypeSets,
};
pub use matcher::matches;
