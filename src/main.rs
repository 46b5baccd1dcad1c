//! readycheck CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use readycheck::cli::{CheckCommand, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for problems with readycheck's own configuration.
const CONFIG_ERROR_EXIT: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("readycheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readycheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("readycheck starting with args: {:?}", cli);

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let command = CheckCommand::from_cli(&cli, project_root);
    let mut stdout = std::io::stdout().lock();

    match command.execute(&mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            let _ = stdout.flush();
            eprintln!("Error: {}", e);
            if e.is_config_error() {
                ExitCode::from(CONFIG_ERROR_EXIT)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
