//! Context predicate matching.
//!
//! A predicate is a list of `(attribute, matcher)` pairs combined with OR:
//! one holding pair is enough. An empty predicate never matches, and an
//! attribute missing from the context satisfies neither `value` nor `!value`.

use crate::context::PlacementContext;
use crate::rule::Matcher;

pub fn matches(predicate: &[(String, Matcher)], ctx: &PlacementContext) -> bool {
    predicate
        .iter()
        .any(|(key, matcher)| matcher.holds(ctx.get(key)))
}
