//! Command implementations. Each returns the text to print on stdout.

use serde::Serialize;

use placewise_core::error::{PlacewiseError, Result};
use placewise_core::{evaluate_move, filter_allowed_types, Decision};

use crate::cli::{Command, ContextArgs, RulesArgs};
use crate::config;

/// Output of one command.
#[derive(Debug)]
pub struct Report {
    pub output: String,
    /// `false` when the evaluated move was denied.
    pub success: bool,
}

#[derive(Serialize)]
struct CheckOutput {
    rules: usize,
    inert: Vec<String>,
}

pub fn run(command: &Command) -> Result<Report> {
    match command {
        Command::Check { rules } => check(rules),
        Command::Evaluate {
            rules,
            moved_type,
            context,
        } => evaluate(rules, moved_type, context),
        Command::Filter {
            rules,
            candidates,
            context,
        } => filter(rules, candidates, context),
    }
}

pub fn check(rules: &RulesArgs) -> Result<Report> {
    let store = config::load_store(&rules.paths)?;
    let out = CheckOutput {
        rules: store.len(),
        inert: store.diagnostics().iter().map(ToString::to_string).collect(),
    };
    tracing::info!(rules = out.rules, inert = out.inert.len(), "rule files ok");
    Ok(Report {
        output: encode(&out)?,
        success: true,
    })
}

pub fn evaluate(rules: &RulesArgs, moved_type: &str, context: &ContextArgs) -> Result<Report> {
    let store = config::load_store(&rules.paths)?;
    let ctx = context.to_context();
    let decision = evaluate_move(&store, &ctx, moved_type);
    Ok(Report {
        success: !matches!(decision, Decision::Denied { .. }),
        output: encode(&decision)?,
    })
}

pub fn filter(rules: &RulesArgs, candidates: &[String], context: &ContextArgs) -> Result<Report> {
    let store = config::load_store(&rules.paths)?;
    let ctx = context.to_context();
    let allowed = filter_allowed_types(&store, &ctx, candidates);
    Ok(Report {
        output: encode(&allowed)?,
        success: true,
    })
}

fn encode<T: Serialize>(v: &T) -> Result<String> {
    serde_json::to_string_pretty(v)
        .map_err(|e| PlacewiseError::InvalidArgument(format!("encode output failed: {e}")))
}
