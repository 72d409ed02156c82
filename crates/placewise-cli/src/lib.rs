//! placewise command-line library.
//!
//! Loads rule files and runs the server-side confirmation commands over the
//! same policy engine the editor uses. Split from `main.rs` so integration
//! tests can drive commands without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
