//! placewise: server-side confirmation of layout placement decisions.
//!
//! Evaluates the same rule files the editor loads, so a move checked in the
//! browser can be re-checked before it is committed.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use placewise_cli::{cli::Cli, commands};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match commands::run(&cli.command) {
        Ok(report) => {
            println!("{}", report.output);
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
