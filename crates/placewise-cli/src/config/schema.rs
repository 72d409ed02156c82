use serde::Deserialize;

use placewise_core::error::{PlacewiseError, Result};
use placewise_core::{RestrictionRule, RuleProvider, RuleStore};

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub version: u32,

    #[serde(default)]
    pub rules: Vec<RestrictionRule>,

    /// Where the rules came from; set by the file loader.
    #[serde(skip, default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "inline".into()
}

impl RulesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_VERSION {
            return Err(PlacewiseError::UnsupportedVersion(self.version));
        }
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.context.keys().any(String::is_empty) {
                return Err(PlacewiseError::InvalidConfig(format!(
                    "rules[{i}].context has an empty attribute name"
                )));
            }
        }
        Ok(())
    }

    pub fn into_store(self) -> RuleStore {
        RuleStore::compile(self.rules)
    }
}

impl RuleProvider for RulesConfig {
    fn name(&self) -> &str {
        &self.source
    }

    fn rules(&self) -> Vec<RestrictionRule> {
        self.rules.clone()
    }
}
