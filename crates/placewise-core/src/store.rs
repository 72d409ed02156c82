//! Rule store: the ordered, compiled rule set shared by every evaluation.
//!
//! Order matters only for transforms (first match wins); allow/deny sets
//! are unions and do not depend on it.

use std::sync::Arc;

use crate::rule::{CompiledRule, Diagnostic, RestrictionRule};

/// A source of restriction rules (a module, a config file, a plugin).
pub trait RuleProvider: Send + Sync {
    fn name(&self) -> &str;
    fn rules(&self) -> Vec<RestrictionRule>;
}

/// Immutable, ordered snapshot of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<CompiledRule>,
    diagnostics: Vec<Diagnostic>,
}

impl RuleStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile raw rules, keeping their order.
    ///
    /// Malformed matchers and patterns do not fail compilation; they are
    /// logged and kept as inert entries.
    pub fn compile<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = RestrictionRule>,
    {
        let mut rules = Vec::new();
        let mut diagnostics = Vec::new();
        for (index, r) in raw.into_iter().enumerate() {
            let (rule, diags) = CompiledRule::compile(index, &r);
            for d in &diags {
                tracing::warn!(rule = %d.rule, entry = %d.entry, problem = d.problem, "inert rule entry");
            }
            if rule.predicate().is_empty() {
                tracing::debug!(index, name = ?rule.name(), "rule has an empty context and never applies");
            }
            diagnostics.extend(diags);
            rules.push(rule);
        }
        Self { rules, diagnostics }
    }

    /// Flatten providers in registration order into one store.
    pub fn aggregate(providers: &[Arc<dyn RuleProvider>]) -> Self {
        let mut raw = Vec::new();
        for p in providers {
            let rules = p.rules();
            tracing::debug!(provider = %p.name(), count = rules.len(), "collected restriction rules");
            raw.extend(rules);
        }
        Self::compile(raw)
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Inert entries found while compiling.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl FromIterator<RestrictionRule> for RuleStore {
    fn from_iter<I: IntoIterator<Item = RestrictionRule>>(iter: I) -> Self {
        Self::compile(iter)
    }
}

impl<'a> IntoIterator for &'a RuleStore {
    type Item = &'a CompiledRule;
    type IntoIter = std::slice::Iter<'a, CompiledRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
