use std::collections::BTreeSet;
use std::sync::Arc;

use indexmap::IndexSet;

use crate::context::PlacementContext;
use crate::decision::Decision;
use crate::rule::CompiledRule;
use crate::store::RuleStore;

use super::matcher::matches;

/// Rules whose predicate matches `ctx`, in store order.
pub fn applicable_rules<'a>(rules: &'a RuleStore, ctx: &PlacementContext) -> Vec<&'a CompiledRule> {
    rules
        .iter()
        .filter(|r| matches(r.predicate(), ctx))
        .collect()
}

/// Allowed and denied type sets accumulated over applicable rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSets {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

impl TypeSets {
    pub fn collect<'a, I>(applicable: I) -> Self
    where
        I: IntoIterator<Item = &'a CompiledRule>,
    {
        let mut sets = TypeSets::default();
        for r in applicable {
            sets.include.extend(r.components().iter().cloned());
            sets.exclude.extend(r.exclude_components().iter().cloned());
        }
        sets
    }

    /// Single-type check: denied when excluded, or when an include list
    /// exists and does not name `ty`.
    pub fn allows(&self, ty: &str) -> bool {
        if !self.exclude.is_empty() && self.exclude.contains(ty) {
            return false;
        }
        if !self.include.is_empty() && !self.include.contains(ty) {
            return false;
        }
        true
    }
}

/// Narrow `candidates` to the types the applicable rules allow.
///
/// Candidate order is kept and duplicates collapse. With no include and no
/// exclude entries the candidates pass through unchanged.
pub fn resolve_types<I, S>(applicable: &[&CompiledRule], candidates: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sets = TypeSets::collect(applicable.iter().copied());
    candidates
        .into_iter()
        .filter(|t| sets.allows(t.as_ref()))
        .map(|t| t.as_ref().to_string())
        .collect()
}

/// First transform target matching `moved_type`, scanning rules then
/// entries in declared order. Targets that are themselves excluded are
/// skipped.
pub fn resolve_transform<'a>(applicable: &[&'a CompiledRule], moved_type: &str) -> Option<&'a str> {
    let sets = TypeSets::collect(applicable.iter().copied());
    applicable
        .iter()
        .copied()
        .flat_map(|r| r.transform())
        .find(|(pattern, target)| !sets.exclude.contains(target) && pattern.matches(moved_type))
        .map(|(_, target)| target.as_str())
}

/// Types from `candidates` that may be inserted at `ctx`.
pub fn filter_allowed_types<I, S>(
    rules: &RuleStore,
    ctx: &PlacementContext,
    candidates: I,
) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let applicable = applicable_rules(rules, ctx);
    let allowed = resolve_types(&applicable, candidates);
    tracing::debug!(
        region = %ctx.region(),
        applicable = applicable.len(),
        allowed = allowed.len(),
        "filtered insertable types"
    );
    allowed
}

/// Decide whether `moved_type` may be dropped at `ctx`.
///
/// A matching transform wins over denial: a type that would be rejected may
/// instead be converted to an allowed variant.
pub fn evaluate_move(rules: &RuleStore, ctx: &PlacementContext, moved_type: &str) -> Decision {
    let applicable = applicable_rules(rules, ctx);

    let decision = match resolve_transform(&applicable, moved_type) {
        Some(variant) => Decision::Transform {
            variant: variant.to_string(),
        },
        None if TypeSets::collect(applicable.iter().copied()).allows(moved_type) => Decision::Allowed,
        None => Decision::denied(),
    };

    tracing::debug!(
        moved_type,
        region = %ctx.region(),
        applicable = applicable.len(),
        decision = decision.as_str(),
        "evaluated move"
    );
    decision
}

/// Policy engine bound to one rule store snapshot.
/// Construct once when rules are loaded, then share via Arc.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    rules: Arc<RuleStore>,
}

impl PolicyEngine {
    pub fn new(rules: Arc<RuleStore>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn filter_allowed_types<I, S>(&self, ctx: &PlacementContext, candidates: I) -> IndexSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filter_allowed_types(&self.rules, ctx, candidates)
    }

    pub fn evaluate_move(&self, ctx: &PlacementContext, moved_type: &str) -> Decision {
        evaluate_move(&self.rules, ctx, moved_type)
    }
}

impl From<RuleStore> for PolicyEngine {
    fn from(rules: RuleStore) -> Self {
        Self::new(Arc::new(rules))
    }
}
