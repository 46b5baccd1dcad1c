//! Application configuration probe.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::AppConfigSettings;
use crate::environment::Environment;
use crate::probe::{Check, ProbeError};

/// Shown for display fields missing from the document.
pub const NOT_SET: &str = "Not set";

/// Loads the application's configuration document and shows a few fields.
///
/// The fields are for display only; their absence is not a failure.
#[derive(Debug, Clone)]
pub struct AppConfigCheck {
    settings: AppConfigSettings,
    root: PathBuf,
    env: Environment,
}

impl AppConfigCheck {
    /// Create a check resolving relative paths against `root`.
    pub fn new(settings: AppConfigSettings, root: PathBuf, env: Environment) -> Self {
        Self { settings, root, env }
    }

    /// Path named by the override variable, or the static fallback.
    pub fn configured_path(&self) -> String {
        self.env
            .non_empty_var(&self.settings.env_override)
            .unwrap_or_else(|| self.settings.default_path.clone())
    }

    fn resolve(&self, configured: &str) -> PathBuf {
        let path = Path::new(configured);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Check for AppConfigCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let configured = self.configured_path();
        let path = self.resolve(&configured);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProbeError::absent(format!("{} not found", configured)));
            }
            Err(e) => return Err(ProbeError::io(format!("cannot read {}", configured), e)),
        };

        let document: Value =
            serde_yaml::from_str(&content).map_err(|e| ProbeError::Malformed {
                path: configured.clone(),
                message: e.to_string(),
            })?;
        if !document.is_mapping() {
            return Err(ProbeError::Malformed {
                path: configured,
                message: "top level is not a mapping".to_string(),
            });
        }

        let mut detail = format!("loaded from {}", configured);
        for field in &self.settings.fields {
            let shown = lookup(&document, field)
                .map(display_scalar)
                .unwrap_or_else(|| NOT_SET.to_string());
            detail.push_str(&format!("; {} = {}", field, shown));
        }
        Ok(detail)
    }
}

fn lookup<'a>(document: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(document, |node, key| node.get(key))
        .filter(|v| !v.is_null())
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
