//! Restriction rule model: the raw record hosts deserialize, and the
//! compiled form the policy engine evaluates.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One restriction rule as written in configuration.
///
/// Keys in `context` are alternatives: the rule applies when any of them
/// matches the placement context (see [`crate::policy::matches`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestrictionRule {
    /// Label used only in diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Attribute name -> `value` or `!value`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: IndexMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude_components: Vec<String>,

    /// Source-type pattern (`card` or `card*`) -> target variant, in priority order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub transform: IndexMap<String, String>,
}

impl RestrictionRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a predicate key.
    pub fn when(mut self, key: impl Into<String>, matcher: impl Into<String>) -> Self {
        self.context.insert(key.into(), matcher.into());
        self
    }

    pub fn allow<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_components.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn transform(mut self, pattern: impl Into<String>, target: impl Into<String>) -> Self {
        self.transform.insert(pattern.into(), target.into());
        self
    }
}

fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Compiled predicate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Attribute present and equal.
    Equals(String),
    /// Attribute present and not equal (`!value`).
    NotEquals(String),
    /// Malformed entry (empty, or a bare `!`); never matches.
    Inert(String),
}

impl Matcher {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('!') {
            Some("") => Matcher::Inert(raw.to_string()),
            Some(v) => Matcher::NotEquals(v.to_string()),
            None if raw.is_empty() => Matcher::Inert(raw.to_string()),
            None => Matcher::Equals(raw.to_string()),
        }
    }

    /// Evaluate against one attribute value. Absent values never hold.
    pub fn holds(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Matcher::Equals(want), Some(v)) => v == want.as_str(),
            (Matcher::NotEquals(unwanted), Some(v)) => v != unwanted.as_str(),
            _ => false,
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, Matcher::Inert(_))
    }
}

/// Compiled transform source pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformPattern {
    Exact(String),
    /// Pattern with a single trailing `*`; holds the part before it.
    Prefix(String),
    /// Empty pattern, several `*`, or a `*` not at the end; never matches.
    Inert(String),
}

impl TransformPattern {
    pub fn parse(raw: &str) -> Self {
        match raw.matches('*').count() {
            0 if raw.is_empty() => TransformPattern::Inert(raw.to_string()),
            0 => TransformPattern::Exact(raw.to_string()),
            1 => match raw.strip_suffix('*') {
                Some(prefix) => TransformPattern::Prefix(prefix.to_string()),
                None => TransformPattern::Inert(raw.to_string()),
            },
            _ => TransformPattern::Inert(raw.to_string()),
        }
    }

    /// A bare `*` has an empty prefix and therefore matches every type.
    pub fn matches(&self, ty: &str) -> bool {
        match self {
            TransformPattern::Exact(p) => p == ty,
            TransformPattern::Prefix(p) => ty.starts_with(p.as_str()),
            TransformPattern::Inert(_) => false,
        }
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, TransformPattern::Inert(_))
    }
}

/// A malformed rule entry found while compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Rule label (`name`, or `#index` when unnamed).
    pub rule: String,
    /// `context.<key>` or `transform.<pattern>`.
    pub entry: String,
    pub problem: &'static str,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}: {} {}", self.rule, self.entry, self.problem)
    }
}

/// Rule with parsed matchers and patterns, ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    index: usize,
    name: Option<String>,
    predicate: Vec<(String, Matcher)>,
    components: BTreeSet<String>,
    exclude_components: BTreeSet<String>,
    transform: Vec<(TransformPattern, String)>,
}

impl CompiledRule {
    /// Compile `raw`, which sits at `index` in the rule store.
    pub fn compile(index: usize, raw: &RestrictionRule) -> (Self, Vec<Diagnostic>) {
        let label = raw.name.clone().unwrap_or_else(|| format!("#{index}"));
        let mut diagnostics = Vec::new();

        let predicate = raw
            .context
            .iter()
            .map(|(key, m)| {
                let matcher = Matcher::parse(m);
                if matcher.is_inert() {
                    diagnostics.push(Diagnostic {
                        rule: label.clone(),
                        entry: format!("context.{key}"),
                        problem: "has an empty matcher",
                    });
                }
                (key.clone(), matcher)
            })
            .collect();

        let transform = raw
            .transform
            .iter()
            .map(|(pattern, target)| {
                let parsed = TransformPattern::parse(pattern);
                if parsed.is_inert() {
                    diagnostics.push(Diagnostic {
                        rule: label.clone(),
                        entry: format!("transform.{pattern}"),
                        problem: "is not an exact type or a single trailing wildcard",
                    });
                    (parsed, target.clone())
                } else if target.is_empty() {
                    diagnostics.push(Diagnostic {
                        rule: label.clone(),
                        entry: format!("transform.{pattern}"),
                        problem: "has an empty target variant",
                    });
                    (TransformPattern::Inert(pattern.clone()), target.clone())
                } else {
                    (parsed, target.clone())
                }
            })
            .collect();

        let rule = Self {
            index,
            name: raw.name.clone(),
            predicate,
            components: raw.components.iter().cloned().collect(),
            exclude_components: raw.exclude_components.iter().cloned().collect(),
            transform,
        };
        (rule, diagnostics)
    }

    /// Position in the rule store.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn predicate(&self) -> &[(String, Matcher)] {
        &self.predicate
    }

    pub fn components(&self) -> &BTreeSet<String> {
        &self.components
    }

    pub fn exclude_components(&self) -> &BTreeSet<String> {
        &self.exclude_components
    }

    pub fn transform(&self) -> &[(TransformPattern, String)] {
        &self.transform
    }
}
