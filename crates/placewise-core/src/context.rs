//! Placement context: where a block is about to land.
//!
//! A context is built once per evaluation by the host (from the editor tree
//! or DOM position) and is read-only afterwards. Attribute values are plain
//! strings; empty values count as absent, except `region` which falls back
//! to [`ROOT_REGION`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlacewiseError, Result};

/// Region name of the top-level container outside any layout section.
pub const ROOT_REGION: &str = "_root";

/// Attribute names understood by the context.
pub mod attr {
    pub const PARENT_TYPE: &str = "parent_type";
    pub const REGION: &str = "region";
    pub const LAYOUT: &str = "layout";
    pub const SIBLING_TYPE: &str = "sibling_type";
    pub const PLACEMENT: &str = "placement";
    /// Derived: `"{layout}:{region}"`, present only when a layout is set.
    pub const LAYOUT_REGION: &str = "layout_region";
}

/// Side of the sibling the block is dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Before,
    After,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Before => "before",
            Placement::After => "after",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = PlacewiseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "before" => Ok(Placement::Before),
            "after" => Ok(Placement::After),
            other => Err(PlacewiseError::InvalidArgument(format!(
                "invalid placement: {other} (expected before|after)"
            ))),
        }
    }
}

/// Immutable description of a drop position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct PlacementContext {
    parent_type: Option<String>,
    region: String,
    layout: Option<String>,
    sibling_type: Option<String>,
    placement: Option<Placement>,
    layout_region: Option<String>,
    extra: BTreeMap<String, String>,
}

impl Default for PlacementContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementContext {
    /// Context for the top-level container with no other attributes.
    pub fn new() -> Self {
        Self {
            parent_type: None,
            region: ROOT_REGION.to_string(),
            layout: None,
            sibling_type: None,
            placement: None,
            layout_region: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_parent_type(mut self, v: impl Into<String>) -> Self {
        self.parent_type = non_empty(v.into());
        self
    }

    /// Empty values reset the region to [`ROOT_REGION`].
    pub fn with_region(mut self, v: impl Into<String>) -> Self {
        self.region = non_empty(v.into()).unwrap_or_else(|| ROOT_REGION.to_string());
        self.refresh_layout_region();
        self
    }

    pub fn with_layout(mut self, v: impl Into<String>) -> Self {
        self.layout = non_empty(v.into());
        self.refresh_layout_region();
        self
    }

    pub fn with_sibling_type(mut self, v: impl Into<String>) -> Self {
        self.sibling_type = non_empty(v.into());
        self
    }

    pub fn with_placement(mut self, v: Placement) -> Self {
        self.placement = Some(v);
        self
    }

    /// Set any attribute by name.
    ///
    /// Named attributes are routed to their typed field. An unparseable
    /// `placement` clears it. The derived `layout_region` cannot be set.
    pub fn with_attr(mut self, key: impl Into<String>, v: impl Into<String>) -> Self {
        let key = key.into();
        let v = v.into();
        match key.as_str() {
            attr::PARENT_TYPE => self.with_parent_type(v),
            attr::REGION => self.with_region(v),
            attr::LAYOUT => self.with_layout(v),
            attr::SIBLING_TYPE => self.with_sibling_type(v),
            attr::PLACEMENT => {
                self.placement = v.parse().ok();
                self
            }
            attr::LAYOUT_REGION => {
                tracing::debug!(value = %v, "ignoring attempt to set derived layout_region");
                self
            }
            _ => {
                match non_empty(v) {
                    Some(v) => {
                        self.extra.insert(key, v);
                    }
                    None => {
                        self.extra.remove(&key);
                    }
                }
                self
            }
        }
    }

    pub fn parent_type(&self) -> Option<&str> {
        self.parent_type.as_deref()
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn sibling_type(&self) -> Option<&str> {
        self.sibling_type.as_deref()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Look up an attribute by name. Unknown names yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            attr::PARENT_TYPE => self.parent_type(),
            attr::REGION => Some(self.region()),
            attr::LAYOUT => self.layout(),
            attr::SIBLING_TYPE => self.sibling_type(),
            attr::PLACEMENT => self.placement.map(Placement::as_str),
            attr::LAYOUT_REGION => self.layout_region.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    /// All present attributes, derived ones included.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        let mut out = self.extra.clone();
        let named = [
            attr::PARENT_TYPE,
            attr::REGION,
            attr::LAYOUT,
            attr::SIBLING_TYPE,
            attr::PLACEMENT,
            attr::LAYOUT_REGION,
        ];
        for key in named {
            if let Some(v) = self.get(key) {
                out.insert(key.to_string(), v.to_string());
            }
        }
        out
    }

    fn refresh_layout_region(&mut self) {
        self.layout_region = self
            .layout
            .as_ref()
            .map(|layout| format!("{layout}:{}", self.region));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlacementContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PlacementContext::new(), |ctx, (k, v)| ctx.with_attr(k, v))
    }
}

impl From<BTreeMap<String, String>> for PlacementContext {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PlacementContext> for BTreeMap<String, String> {
    fn from(ctx: PlacementContext) -> Self {
        let mut out = ctx.attributes();
        out.remove(attr::LAYOUT_REGION);
        out
    }
}

fn non_empty(v: String) -> Option<String> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}
