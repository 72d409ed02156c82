//! placewise core: placement restriction rules and the policy engine that
//! evaluates them.
//!
//! This crate owns the rule model, the placement context record, and the
//! matching/resolution algorithms used to answer three questions for a drop
//! location in a layout builder:
//! - which block types may be inserted there ([`filter_allowed_types`]),
//! - whether an in-flight move is permitted ([`evaluate_move`]),
//! - whether the moved block must switch to another display variant.
//!
//! It carries no I/O, transport, or runtime dependencies so the same rule
//! set can be evaluated by any host with identical results.
//!
//! # Matching semantics
//! Keys inside one rule's `context` predicate are **alternatives**, not
//! conditions: a rule applies when *any* key matches. A rule meant for
//! "region A of layout B" needs the derived `layout_region` key or two rules.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed rule
//! entries compile to inert forms that never match instead of failing the
//! evaluation.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod context;
pub mod decision;
pub mod error;
pub mod policy;
pub mod rule;
pub mod store;
pub mod variation;

pub use context::{Placement, PlacementContext, ROOT_REGION};
pub use decision::{Decision, DENIED_MESSAGE};
pub use error::{ErrorCode, PlacewiseError, Result};
pub use policy::{
    applicable_rules, evaluate_move, filter_allowed_types, resolve_transform, resolve_types,
    PolicyEngine, TypeSets,
};
pub use rule::{CompiledRule, Diagnostic, Matcher, RestrictionRule, TransformPattern};
pub use store::{RuleProvider, RuleStore};
