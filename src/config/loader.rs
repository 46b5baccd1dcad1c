//! Configuration file discovery and loading.

use crate::config::schema::ReadycheckConfig;
use crate::error::{ReadycheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up in the project root, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["readycheck.yml", "readycheck.yaml"];

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file found; built-in defaults.
    Defaults,
    /// Loaded from this file.
    File(PathBuf),
}

/// Load the configuration for a project.
///
/// An `explicit` path (from `--config` or `READYCHECK_CONFIG`) must exist.
/// Otherwise the project root is searched for [`CONFIG_FILE_NAMES`], and
/// built-in defaults are used when none is present.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path does not exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if values are out of range.
pub fn load_config(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<(ReadycheckConfig, ConfigSource)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_project_config(project_root),
    };

    let Some(path) = path else {
        tracing::info!("no readycheck config found, using built-in catalogue");
        return Ok((ReadycheckConfig::default(), ConfigSource::Defaults));
    };

    let config = load_config_file(&path)?;
    config.validate()?;
    tracing::info!(path = %path.display(), "loaded readycheck config");
    Ok((config, ConfigSource::File(path)))
}

/// Find a config file in the project root.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<ReadycheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadycheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadycheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// Empty documents yield the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReadycheckConfig> {
    if content.trim().is_empty() {
        return Ok(ReadycheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ReadycheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
