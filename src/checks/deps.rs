//! Dependency probes.
//!
//! Module dependencies are resolved by asking an interpreter to import
//! them in a child process. The helper script separates two outcomes the
//! report must keep apart:
//!
//! - the module cannot be found at all (exit code [`ABSENT_EXIT_CODE`]),
//!   which an optional probe reports as skipped
//! - the module is found but raises while importing, which is always a
//!   failure
//!
//! Executable dependencies are looked up on `PATH` without spawning
//! anything.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Context;

use crate::environment::{resolve_tool_path, Environment};
use crate::probe::{Check, ProbeError};

/// Exit code the helper uses for "module not found".
pub const ABSENT_EXIT_CODE: i32 = 3;

/// Upper bound on one import. An import that hangs counts as broken.
pub const IMPORT_TIMEOUT: Duration = Duration::from_secs(10);

const IMPORT_SCRIPT: &str = r#"
import importlib, importlib.util, sys
name = sys.argv[1]
try:
    spec = importlib.util.find_spec(name)
except (ImportError, ValueError):
    spec = None
if spec is None:
    sys.exit(3)
module = importlib.import_module(name)
print(getattr(module, "__version__", ""))
"#;

/// Resolves a module through an interpreter.
#[derive(Debug, Clone)]
pub struct ModuleCheck {
    module: String,
    interpreter: String,
    env: Environment,
}

impl ModuleCheck {
    /// Create a check importing `module` with `interpreter`.
    pub fn new(module: impl Into<String>, interpreter: impl Into<String>, env: Environment) -> Self {
        Self {
            module: module.into(),
            interpreter: interpreter.into(),
            env,
        }
    }

    fn run_import(&self, interpreter: PathBuf) -> anyhow::Result<std::process::Output> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("starting import runtime")?;

        runtime.block_on(async {
            let child = tokio::process::Command::new(&interpreter)
                .arg("-c")
                .arg(IMPORT_SCRIPT)
                .arg(&self.module)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .with_context(|| format!("spawning {}", interpreter.display()))?;

            match tokio::time::timeout(IMPORT_TIMEOUT, child.wait_with_output()).await {
                Ok(output) => output.with_context(|| format!("waiting for {}", interpreter.display())),
                Err(_) => anyhow::bail!(
                    "importing {} timed out after {}s",
                    self.module,
                    IMPORT_TIMEOUT.as_secs()
                ),
            }
        })
    }
}

impl Check for ModuleCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let Some(interpreter) = resolve_tool_path(&self.interpreter, &self.env.path_entries())
        else {
            return Err(ProbeError::absent(format!(
                "{} not installed ({} not found)",
                self.module, self.interpreter
            )));
        };
        tracing::debug!(module = %self.module, interpreter = %interpreter.display(), "importing");

        let output = self.run_import(interpreter)?;
        match output.status.code() {
            Some(0) => {
                let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
                Ok(if version.is_empty() {
                    "importable".to_string()
                } else {
                    format!("version {}", version)
                })
            }
            Some(ABSENT_EXIT_CODE) => {
                Err(ProbeError::absent(format!("{} not installed", self.module)))
            }
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let reason = stderr
                    .lines()
                    .rev()
                    .find(|l| !l.trim().is_empty())
                    .unwrap_or("import failed")
                    .trim();
                Err(ProbeError::mismatch("importable", reason))
            }
        }
    }
}

/// Looks an executable up on `PATH`.
#[derive(Debug, Clone)]
pub struct ExecutableCheck {
    executable: String,
    env: Environment,
}

impl ExecutableCheck {
    /// Create a check for `executable`.
    pub fn new(executable: impl Into<String>, env: Environment) -> Self {
        Self {
            executable: executable.into(),
            env,
        }
    }
}

impl Check for ExecutableCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        resolve_tool_path(&self.executable, &self.env.path_entries())
            .map(|path| path.display().to_string())
            .ok_or_else(|| ProbeError::absent(format!("{} not found on PATH", self.executable)))
    }
}
