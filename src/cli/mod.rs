//! Command-line interface for readycheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The command that runs the catalogue and prints the report

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};
