//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use placewise_core::{Placement, PlacementContext};

#[derive(Parser, Debug)]
#[command(name = "placewise", version, about = "Evaluate layout placement restriction rules")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and compile rule files, reporting inert entries.
    Check {
        #[command(flatten)]
        rules: RulesArgs,
    },
    /// Decide whether a block type may be moved to a position.
    Evaluate {
        #[command(flatten)]
        rules: RulesArgs,
        /// Type of the block being moved.
        #[arg(long = "type", value_name = "TYPE")]
        moved_type: String,
        #[command(flatten)]
        context: ContextArgs,
    },
    /// Narrow a list of candidate types to those insertable at a position.
    Filter {
        #[command(flatten)]
        rules: RulesArgs,
        #[arg(long, value_delimiter = ',', required = true)]
        candidates: Vec<String>,
        #[command(flatten)]
        context: ContextArgs,
    },
}

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Rule file (YAML). Repeat to merge several files, in order.
    #[arg(long = "rules", value_name = "FILE", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ContextArgs {
    #[arg(long)]
    pub parent_type: Option<String>,
    /// Defaults to `_root`.
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub layout: Option<String>,
    #[arg(long)]
    pub sibling_type: Option<String>,
    #[arg(long)]
    pub placement: Option<Placement>,
    /// Extra attribute; repeatable.
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,
}

impl ContextArgs {
    pub fn to_context(&self) -> PlacementContext {
        let mut ctx = PlacementContext::new();
        if let Some(v) = &self.parent_type {
            ctx = ctx.with_parent_type(v);
        }
        if let Some(v) = &self.region {
            ctx = ctx.with_region(v);
        }
        if let Some(v) = &self.layout {
            ctx = ctx.with_layout(v);
        }
        if let Some(v) = &self.sibling_type {
            ctx = ctx.with_sibling_type(v);
        }
        if let Some(v) = self.placement {
            ctx = ctx.with_placement(v);
        }
        for (k, v) in &self.attrs {
            ctx = ctx.with_attr(k, v);
        }
        ctx
    }
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid attr: {s} (expected key=value)"))?;
    if k.is_empty() {
        return Err(format!("invalid attr: {s} (empty key)"));
    }
    Ok((k.to_string(), v.to_string()))
}
