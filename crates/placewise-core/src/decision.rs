//! Evaluation outcome for a single move.

use serde::Serialize;

/// Reason carried by [`Decision::Denied`].
pub const DENIED_MESSAGE: &str = "This component cannot be moved here.";

/// Result of evaluating one move. Produced per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Move allowed, but the block must switch to `variant` first.
    Transform { variant: String },
    /// Move rejected; `reason` is shown to the editor user.
    Denied { reason: String },
    Allowed,
}

impl Decision {
    pub(crate) fn denied() -> Self {
        Decision::Denied {
            reason: DENIED_MESSAGE.to_string(),
        }
    }

    /// `true` unless the move is rejected.
    pub fn is_permitted(&self) -> bool {
        !matches!(self, Decision::Denied { .. })
    }

    /// Target variant when the decision is a transform.
    pub fn variant(&self) -> Option<&str> {
        match self {
            Decision::Transform { variant } => Some(variant),
            _ => None,
        }
    }

    /// Short label used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Transform { .. } => "transform",
            Decision::Denied { .. } => "denied",
            Decision::Allowed => "allowed",
        }
    }
}
