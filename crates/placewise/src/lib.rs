//! Top-level facade crate for placewise.
//!
//! Re-exports the policy engine and the rule file loader so users can depend on a single crate.

pub mod core {
    pub use placewise_core::*;
}

pub mod cli {
    pub use placewise_cli::*;
}

pub use placewise_core::{evaluate_move, filter_allowed_types, Decision, PlacementContext, RuleStore};
