//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// readycheck - Verify a web application's runtime environment.
///
/// Runs every readiness probe once and prints a report. Probes never stop
/// each other: the report always lists all of them.
#[derive(Debug, Parser)]
#[command(name = "readycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file, relative to the current directory (overrides <project>/readycheck.yml)
    #[arg(short, long, env = "READYCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show captured traces under failing probes
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit non-zero when a required probe fails
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["readycheck"]).unwrap();
        assert!(cli.project.is_none());
        assert!(!cli.json);
        assert!(!cli.strict);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "readycheck",
            "--project",
            "/srv/app",
            "--config",
            "ci.yml",
            "--json",
            "--verbose",
            "--no-color",
            "--strict",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/srv/app")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.yml")));
        assert!(cli.json && cli.verbose && cli.no_color && cli.strict && cli.debug);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["readycheck", "--parallel"]).is_err());
    }
}
