//! Applying a transform decision to a block's stored settings.
//!
//! Blocks keep their display variant inside behavior settings:
//!
//! ```json
//! { "style_options": { "card_style": { "component_variation": "narrow" } } }
//! ```
//!
//! Only style options that already carry a non-empty `component_variation`
//! are rewritten.

use serde_json::Value;

const VARIATION_SEPARATOR: &str = "__";
const STYLE_OPTIONS: &str = "style_options";
const COMPONENT_VARIATION: &str = "component_variation";

/// Stored variation name for a transform target.
///
/// `card__wide` -> `wide`; targets without the `__` separator are used as is.
pub fn variation_name(target: &str) -> &str {
    target
        .split(VARIATION_SEPARATOR)
        .nth(1)
        .unwrap_or(target)
}

/// Rewrite the variation of every style option that sets one.
/// Returns how many entries changed.
pub fn apply_variation(settings: &mut Value, target: &str) -> usize {
    let name = variation_name(target);
    let Some(options) = settings
        .get_mut(STYLE_OPTIONS)
        .and_then(Value::as_object_mut)
    else {
        return 0;
    };

    let mut changed = 0;
    for option in options.values_mut() {
        let Some(current) = option.get_mut(COMPONENT_VARIATION) else {
            continue;
        };
        if is_empty(current) {
            continue;
        }
        if current.as_str() != Some(name) {
            *current = Value::String(name.to_string());
            changed += 1;
        }
    }
    changed
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}
