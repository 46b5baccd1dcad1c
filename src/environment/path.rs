//! Executable lookup on `PATH`.
//!
//! Does NOT shell out to `which`: its behavior varies across systems and
//! it is sometimes a shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A `tool` that
/// already contains a path separator is checked as-is.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let direct = Path::new(tool);
    if direct.components().count() > 1 {
        return (direct.is_file() && is_executable(direct)).then(|| direct.to_path_buf());
    }

    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool), dir.join(format!("{}.exe", tool))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}
