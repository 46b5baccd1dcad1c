//! File and directory probes.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::probe::{Check, ProbeError};

/// Directory entries listed before the rest are elided.
pub const MAX_LISTED_ENTRIES: usize = 10;

/// Checks that a file exists and reports its size.
#[derive(Debug, Clone)]
pub struct FileCheck {
    label: String,
    path: PathBuf,
}

impl FileCheck {
    /// `label` is how the path appears in the report; `path` is where it is read.
    pub fn new(label: impl Into<String>, path: PathBuf) -> Self {
        Self {
            label: label.into(),
            path,
        }
    }
}

impl Check for FileCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let metadata = match self.path.metadata() {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProbeError::absent(format!("{} not found", self.label)));
            }
            Err(e) => return Err(ProbeError::io(format!("cannot stat {}", self.label), e)),
        };

        if metadata.is_dir() {
            return Err(ProbeError::mismatch("a file", "directory"));
        }
        Ok(format!("{} bytes", metadata.len()))
    }
}

/// Checks that a directory exists and lists its entries.
#[derive(Debug, Clone)]
pub struct DirectoryCheck {
    label: String,
    path: PathBuf,
}

impl DirectoryCheck {
    /// `label` is how the path appears in the report; `path` is where it is read.
    pub fn new(label: impl Into<String>, path: PathBuf) -> Self {
        Self {
            label: label.into(),
            path,
        }
    }
}

impl Check for DirectoryCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let metadata = match self.path.metadata() {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProbeError::absent(format!("{} not found", self.label)));
            }
            Err(e) => return Err(ProbeError::io(format!("cannot stat {}", self.label), e)),
        };
        if !metadata.is_dir() {
            return Err(ProbeError::mismatch("a directory", "file"));
        }

        let listing_error = |e| ProbeError::io(format!("cannot list {}", self.label), e);
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.path).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(describe_listing(&names))
    }
}

fn describe_listing(names: &[String]) -> String {
    match names.len() {
        0 => "empty".to_string(),
        n => {
            let noun = if n == 1 { "entry" } else { "entries" };
            let mut shown = names[..n.min(MAX_LISTED_ENTRIES)].join(", ");
            if n > MAX_LISTED_ENTRIES {
                shown.push_str(", …");
            }
            format!("{} {}: {}", n, noun, shown)
        }
    }
}
