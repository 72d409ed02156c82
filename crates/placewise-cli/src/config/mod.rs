//! Rule file loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use placewise_core::error::{PlacewiseError, Result};
use placewise_core::{RuleProvider, RuleStore};

pub use schema::RulesConfig;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<RulesConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| PlacewiseError::Io(format!("read {} failed: {e}", path.display())))?;
    let mut cfg = load_from_str(&s)
        .map_err(|e| match e {
            PlacewiseError::InvalidConfig(msg) => {
                PlacewiseError::InvalidConfig(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
    cfg.source = path.display().to_string();
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<RulesConfig> {
    let cfg: RulesConfig = serde_yaml::from_str(s)
        .map_err(|e| PlacewiseError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load every rule file and compile them, in the given order, into one store.
pub fn load_store<P: AsRef<Path>>(paths: &[P]) -> Result<RuleStore> {
    let mut providers: Vec<Arc<dyn RuleProvider>> = Vec::with_capacity(paths.len());
    for p in paths {
        providers.push(Arc::new(load_from_file(p)?));
    }
    Ok(RuleStore::aggregate(&providers))
}
