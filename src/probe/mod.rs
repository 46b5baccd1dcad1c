//! Probe definitions.
//!
//! A probe is one named, independently failing readiness check. This
//! module provides:
//!
//! - [`Probe`] - a check plus its descriptor
//! - [`ProbeInfo`] - name, category and required flag
//! - [`Check`] - the evaluation contract every probe implements
//! - [`ProbeError`] - why an evaluation did not pass
//! - [`status`] - per-probe outcome types
//!
//! # Example
//!
//! ```
//! use readycheck::probe::{Category, Probe, ProbeError};
//!
//! let probe = Probe::required("answer", Category::Environment, || {
//!     Ok::<_, ProbeError>("42".to_string())
//! });
//! assert_eq!(probe.info().name, "answer");
//! assert!(probe.info().required);
//! ```

pub mod error;
pub mod status;

pub use error::ProbeError;
pub use status::{ProbeResult, ProbeStatus};

use serde::Serialize;
use std::fmt;

/// The area of the environment a probe inspects.
///
/// Categories double as report section headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Environment variables.
    Environment,
    /// Individual asset files.
    Filesystem,
    /// Required directories.
    Directory,
    /// Third-party capabilities (modules, executables).
    Dependency,
    /// Application configuration document.
    Configuration,
    /// In-process framework and template checks.
    FrameworkSmoke,
}

impl Category {
    /// Section title used in the rendered report.
    pub fn title(self) -> &'static str {
        match self {
            Self::Environment => "Environment",
            Self::Filesystem => "Files",
            Self::Directory => "Directories",
            Self::Dependency => "Dependencies",
            Self::Configuration => "Configuration",
            Self::FrameworkSmoke => "Framework",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Descriptor of a probe, carried into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeInfo {
    /// Identifier shown in the report. Need not be unique.
    pub name: String,
    /// What the probe inspects.
    pub category: Category,
    /// Whether an absent capability counts as a failure.
    pub required: bool,
}

/// Evaluation contract for a probe.
///
/// Returns a human-readable detail on success. Implementations capture
/// whatever context they need when constructed, so evaluation takes no
/// arguments and can be repeated.
pub trait Check {
    /// Run the check against the live environment.
    fn evaluate(&self) -> Result<String, ProbeError>;
}

impl<F> Check for F
where
    F: Fn() -> Result<String, ProbeError>,
{
    fn evaluate(&self) -> Result<String, ProbeError> {
        self()
    }
}

/// A named, categorized check.
pub struct Probe {
    info: ProbeInfo,
    check: Box<dyn Check>,
}

impl Probe {
    /// Create a probe.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        required: bool,
        check: impl Check + 'static,
    ) -> Self {
        Self {
            info: ProbeInfo {
                name: name.into(),
                category,
                required,
            },
            check: Box::new(check),
        }
    }

    /// Create a probe whose absent capability is a failure.
    pub fn required(
        name: impl Into<String>,
        category: Category,
        check: impl Check + 'static,
    ) -> Self {
        Self::new(name, category, true, check)
    }

    /// Create a probe whose absent capability is only skipped.
    pub fn optional(
        name: impl Into<String>,
        category: Category,
        check: impl Check + 'static,
    ) -> Self {
        Self::new(name, category, false, check)
    }

    /// Get the probe descriptor.
    pub fn info(&self) -> &ProbeInfo {
        &self.info
    }

    /// Evaluate the underlying check.
    pub fn evaluate(&self) -> Result<String, ProbeError> {
        self.check.evaluate()
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe").field("info", &self.info).finish()
    }
}
