//! Probe outcome types.
//!
//! Each probe evaluation produces a `ProbeResult` describing whether the
//! probed capability is ready.

use serde::Serialize;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// The capability is present and working.
    Pass,
    /// A required capability is absent, or any capability is broken.
    Fail,
    /// An optional capability is absent.
    Skipped,
}

impl ProbeStatus {
    /// Whether this status counts against readiness.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Fail)
    }
}

/// The result of evaluating one probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Outcome.
    pub status: ProbeStatus,
    /// Human-readable detail (a size, a length, a loaded value).
    pub detail: String,
    /// Captured failure description. Present only on `Fail`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Full cause chain of the failure. Present only on `Fail`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// Wall-clock evaluation time.
    pub elapsed_ms: u64,
}

impl ProbeResult {
    /// A passing result.
    pub fn pass(detail: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Pass,
            detail: detail.into(),
            error: None,
            trace: None,
            elapsed_ms: 0,
        }
    }

    /// A skipped result.
    pub fn skipped(detail: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Skipped,
            detail: detail.into(),
            error: None,
            trace: None,
            elapsed_ms: 0,
        }
    }

    /// A failing result.
    pub fn fail(detail: impl Into<String>, error: impl Into<String>, trace: Option<String>) -> Self {
        Self {
            status: ProbeStatus::Fail,
            detail: detail.into(),
            error: Some(error.into()),
            trace,
            elapsed_ms: 0,
        }
    }

    /// Record how long evaluation took.
    pub fn with_elapsed_ms(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_has_no_error() {
        let result = ProbeResult::pass("1024 bytes");
        assert_eq!(result.status, ProbeStatus::Pass);
        assert!(result.error.is_none());
        assert!(!result.status.is_failure());
    }

    #[test]
    fn skipped_has_no_error() {
        let result = ProbeResult::skipped("pandas not installed");
        assert_eq!(result.status, ProbeStatus::Skipped);
        assert!(result.error.is_none());
        assert!(!result.status.is_failure());
    }

    #[test]
    fn fail_carries_error() {
        let result = ProbeResult::fail("500", "expected 200, got 500", None);
        assert!(result.status.is_failure());
        assert_eq!(result.error.as_deref(), Some("expected 200, got 500"));
    }

    #[test]
    fn serialization_omits_absent_error() {
        let json = serde_json::to_value(ProbeResult::pass("ok").with_elapsed_ms(3)).unwrap();
        assert_eq!(json["status"], "pass");
        assert_eq!(json["elapsed_ms"], 3);
        assert!(json.get("error").is_none());
    }
}
