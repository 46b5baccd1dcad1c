//! The `readycheck` command.

use std::io::Write;
use std::path::PathBuf;

use crate::checks::{build_catalogue, CatalogueContext};
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::ui::{render_with, should_use_colors, RenderOptions, Theme};

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Loads the configuration, runs the catalogue and prints the report.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    json: bool,
    verbose: bool,
    colors: bool,
    strict: bool,
}

impl CheckCommand {
    /// Create the command for `project_root`.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
            json: false,
            verbose: false,
            colors: false,
            strict: false,
        }
    }

    /// Build the command from parsed arguments.
    pub fn from_cli(cli: &Cli, project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: cli.config.clone(),
            json: cli.json,
            verbose: cli.verbose,
            colors: !cli.no_color && should_use_colors(),
            strict: cli.strict,
        }
    }

    /// Use an explicit config file.
    ///
    /// A relative path is resolved against the current directory, not
    /// the project root.
    pub fn with_config(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Emit JSON instead of text.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Fail when a required probe fails.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Run the catalogue and write the report to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let (config, source) = load_config(&self.project_root, self.config_path.as_deref())?;
        tracing::debug!(?source, root = %self.project_root.display(), "starting readiness run");

        let context = CatalogueContext::new(self.project_root.clone());
        let report = build_catalogue(&config, &context).run();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        } else {
            let options = RenderOptions {
                theme: Theme::for_colors(self.colors),
                show_traces: self.verbose,
            };
            out.write_all(render_with(&report, &options).as_bytes())?;
        }
        out.flush()?;

        if self.strict && report.has_required_failures() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
