//! Probe evaluation errors.
//!
//! A [`ProbeError`] never aborts a run. The verifier turns it into a
//! `Fail` or `Skipped` result depending on the variant and on whether the
//! probe is required.

use std::error::Error as StdError;
use thiserror::Error;

/// Why a probe did not pass.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probed capability does not exist at all.
    #[error("{detail}")]
    Absent { detail: String },

    /// The capability exists but did not behave as expected.
    #[error("expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },

    /// A filesystem or process operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A structured document could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Malformed { path: String, message: String },

    /// Anything else, including errors raised by the target application.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Capability absent.
    pub fn absent(detail: impl Into<String>) -> Self {
        Self::Absent {
            detail: detail.into(),
        }
    }

    /// Capability present but wrong.
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Wrap an IO error with what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the capability is absent rather than broken.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent { .. })
    }

    /// Short detail for the report line.
    pub fn detail(&self) -> String {
        match self {
            Self::Absent { detail } => detail.clone(),
            Self::Mismatch { actual, .. } => actual.clone(),
            Self::Io { context, .. } => context.clone(),
            Self::Malformed { path, .. } => format!("malformed {}", path),
            Self::Other(err) => format!("{:#}", err),
        }
    }

    /// Failure description for the report.
    ///
    /// Wrapped `anyhow` errors include their whole context chain, so the
    /// root cause is visible without a trace.
    pub fn description(&self) -> String {
        match self {
            Self::Other(err) => format!("{:#}", err),
            other => other.to_string(),
        }
    }

    /// Full cause chain, for operator diagnosis.
    ///
    /// For wrapped `anyhow` errors this is anyhow's debug rendering, which
    /// includes a backtrace when `RUST_BACKTRACE` is enabled.
    pub fn trace(&self) -> String {
        if let Self::Other(err) = self {
            return format!("{:?}", err);
        }

        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}
