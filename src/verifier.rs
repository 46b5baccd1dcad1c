//! Sequential readiness verifier.
//!
//! The [`Verifier`] owns an ordered catalogue of probes and runs every
//! one of them, in registration order, each inside its own failure
//! boundary. A probe that errors or panics becomes a `Fail` entry; it
//! never stops the probes after it.
//!
//! # Example
//!
//! ```
//! use readycheck::probe::{Category, Probe, ProbeError, ProbeStatus};
//! use readycheck::verifier::Verifier;
//!
//! let mut verifier = Verifier::new();
//! verifier.register(Probe::required("a", Category::Dependency, || {
//!     Ok::<_, ProbeError>("importable".to_string())
//! }));
//! verifier.register(Probe::optional("b", Category::Dependency, || {
//!     Err::<String, _>(ProbeError::absent("b not installed"))
//! }));
//!
//! let report = verifier.run();
//! let statuses: Vec<_> = report.entries().iter().map(|e| e.result.status).collect();
//! assert_eq!(statuses, [ProbeStatus::Pass, ProbeStatus::Skipped]);
//! ```

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::environment::Environment;
use crate::probe::{Probe, ProbeInfo, ProbeResult, ProbeStatus};
use crate::secrets::OutputMasker;

/// Runs an ordered catalogue of probes.
#[derive(Debug, Default)]
pub struct Verifier {
    probes: Vec<Probe>,
    env: Environment,
    protected_vars: Vec<String>,
}

impl Verifier {
    /// Create an empty verifier reading the live process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty verifier reading secrets from `env`.
    pub fn with_environment(env: Environment) -> Self {
        Self {
            env,
            ..Self::default()
        }
    }

    /// Append a probe to the catalogue. Duplicate names are allowed.
    pub fn register(&mut self, probe: Probe) {
        self.probes.push(probe);
    }

    /// Mark an environment variable as secret.
    ///
    /// Its current value is masked out of every detail, error and trace
    /// before a report is returned.
    pub fn protect_env_var(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.protected_vars.contains(&name) {
            self.protected_vars.push(name);
        }
    }

    /// Registered probes, in order.
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    /// Number of registered probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether no probes are registered.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Run every probe once, in registration order.
    ///
    /// Each call re-queries the live environment and produces an
    /// independent report.
    pub fn run(&self) -> Report {
        let mut report = Report::new(Utc::now());
        let masker = self.masker();
        tracing::debug!(
            probes = self.probes.len(),
            secrets = masker.secret_count(),
            "starting run"
        );

        for probe in &self.probes {
            let info = probe.info();
            tracing::debug!(name = %info.name, category = %info.category, "running probe");

            let mut result = run_probe(probe);
            result.detail = masker.mask(&result.detail);
            masker.mask_opt(&mut result.error);
            masker.mask_opt(&mut result.trace);

            match result.status {
                ProbeStatus::Fail => tracing::warn!(
                    name = %info.name,
                    error = result.error.as_deref().unwrap_or_default(),
                    "probe failed"
                ),
                status => tracing::debug!(name = %info.name, ?status, "probe finished"),
            }

            report.push(info.clone(), result);
        }

        report
    }

    fn masker(&self) -> OutputMasker {
        let mut masker = OutputMasker::new();
        for name in &self.protected_vars {
            if let Some(value) = self.env.var(name) {
                masker.add_secret(value);
            }
        }
        masker
    }
}

thread_local! {
    static EVALUATING: Cell<bool> = const { Cell::new(false) };
    static PANIC_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PANIC_HOOK: Once = Once::new();

/// Route panics raised while a check is evaluated into [`PANIC_TRACE`].
///
/// Panics on other threads, or outside an evaluation, reach the previous hook.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if EVALUATING.with(Cell::get) {
                let trace = format!("{}\n{}", info, Backtrace::force_capture());
                PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
            } else {
                previous(info);
            }
        }));
    });
}

/// Evaluate one probe inside a failure boundary.
fn run_probe(probe: &Probe) -> ProbeResult {
    install_panic_hook();
    let started = Instant::now();
    let outer = EVALUATING.with(|flag| flag.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| probe.evaluate()));
    EVALUATING.with(|flag| flag.set(outer));

    let result = match outcome {
        Ok(Ok(detail)) => ProbeResult::pass(detail),
        Ok(Err(err)) if err.is_absent() && !probe.info().required => {
            ProbeResult::skipped(err.detail())
        }
        Ok(Err(err)) => ProbeResult::fail(err.detail(), err.description(), Some(err.trace())),
        Err(payload) => {
            let trace = PANIC_TRACE.with(|slot| slot.borrow_mut().take());
            ProbeResult::fail(
                "probe panicked",
                format!("panicked: {}", panic_message(payload.as_ref())),
                trace,
            )
        }
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    result.with_elapsed_ms(elapsed_ms)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// One probe and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The probe descriptor.
    #[serde(flatten)]
    pub probe: ProbeInfo,
    /// What happened when it ran.
    pub result: ProbeResult,
}

/// Per-status counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Probes that passed.
    pub passed: usize,
    /// Probes that failed.
    pub failed: usize,
    /// Optional probes whose capability was absent.
    pub skipped: usize,
}

/// The ordered outcome of one verifier run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    generated_at: DateTime<Utc>,
    entries: Vec<ReportEntry>,
    summary: Summary,
}

impl Report {
    /// Create an empty report stamped with `generated_at`.
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            entries: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, probe: ProbeInfo, result: ProbeResult) {
        match result.status {
            ProbeStatus::Pass => self.summary.passed += 1,
            ProbeStatus::Fail => self.summary.failed += 1,
            ProbeStatus::Skipped => self.summary.skipped += 1,
        }
        self.entries.push(ReportEntry { probe, result });
    }

    /// When the run started.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-status counts.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// First entry with the given name.
    pub fn find(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.probe.name == name)
    }

    /// Whether any required probe failed.
    ///
    /// Failing optional probes are reported but do not count.
    pub fn has_required_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.probe.required && e.result.status.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Category, ProbeError};
    use std::cell::Cell;
    use std::rc::Rc;

    fn ok(detail: &'static str) -> impl Fn() -> Result<String, ProbeError> {
        move || Ok(detail.to_string())
    }

    #[test]
    fn report_matches_registration_order() {
        let mut verifier = Verifier::new();
        for name in ["one", "two", "two", "three"] {
            verifier.register(Probe::required(name, Category::Filesystem, ok("x")));
        }

        let report = verifier.run();
        let names: Vec<_> = report.entries().iter().map(|e| e.probe.name.as_str()).collect();
        assert_eq!(names, ["one", "two", "two", "three"]);
        assert_eq!(report.len(), verifier.len());
    }

    #[test]
    fn errors_do_not_stop_later_probes() {
        let mut verifier = Verifier::new();
        verifier.register(Probe::required("broken", Category::Configuration, || {
            Err::<String, _>(ProbeError::Other(anyhow::anyhow!("boom")))
        }));
        verifier.register(Probe::required("after", Category::Configuration, ok("fine")));

        let report = verifier.run();
        assert_eq!(report.entries()[0].result.status, ProbeStatus::Fail);
        assert_eq!(report.entries()[0].result.error.as_deref(), Some("boom"));
        assert_eq!(report.entries()[1].result.status, ProbeStatus::Pass);
    }

    #[test]
    fn panics_are_contained() {
        let mut verifier = Verifier::new();
        verifier.register(Probe::required("panics", Category::FrameworkSmoke, || {
            if true {
                panic!("template engine exploded");
            }
            Ok::<_, ProbeError>(String::new())
        }));
        verifier.register(Probe::required("after", Category::FrameworkSmoke, ok("fine")));

        let report = verifier.run();
        let first = &report.entries()[0].result;
        assert_eq!(first.status, ProbeStatus::Fail);
        assert!(first
            .error
            .as_deref()
            .unwrap()
            .contains("template engine exploded"));
        let trace = first.trace.as_deref().unwrap();
        assert!(trace.contains("template engine exploded"));
        assert!(trace.contains("src/verifier.rs"));
        assert_eq!(report.entries()[1].result.status, ProbeStatus::Pass);
    }

    #[test]
    fn error_names_the_root_cause() {
        let mut verifier = Verifier::new();
        verifier.register(Probe::required("named template", Category::FrameworkSmoke, || {
            Err::<String, _>(ProbeError::Other(
                anyhow::anyhow!("syntax error: unexpected end of input")
                    .context("rendering template index.html"),
            ))
        }));

        let report = verifier.run();
        let result = &report.entries()[0].result;
        assert_eq!(
            result.error.as_deref(),
            Some("rendering template index.html: syntax error: unexpected end of input")
        );
        assert!(result.detail.contains("syntax error"));
    }

    #[test]
    fn short_protected_values_are_not_masked() {
        let env = Environment::from_pairs([("SECRET_KEY", "4")]);
        let mut verifier = Verifier::with_environment(env);
        verifier.protect_env_var("SECRET_KEY");
        verifier.register(Probe::required("icon", Category::Filesystem, ok("1024 bytes")));

        let report = verifier.run();
        assert_eq!(report.entries()[0].result.detail, "1024 bytes");
    }

    #[test]
    fn absent_optional_is_skipped_absent_required_fails() {
        let absent = || Err::<String, _>(ProbeError::absent("not installed"));
        let mut verifier = Verifier::new();
        verifier.register(Probe::optional("opt", Category::Dependency, absent));
        verifier.register(Probe::required("req", Category::Dependency, absent));

        let report = verifier.run();
        let opt = &report.entries()[0].result;
        assert_eq!(opt.status, ProbeStatus::Skipped);
        assert!(opt.error.is_none());
        let req = &report.entries()[1].result;
        assert_eq!(req.status, ProbeStatus::Fail);
        assert_eq!(req.detail, "not installed");
    }

    #[test]
    fn broken_optional_still_fails() {
        let mut verifier = Verifier::new();
        verifier.register(Probe::optional("pandas", Category::Dependency, || {
            Err::<String, _>(ProbeError::mismatch("importable", "ImportError: numpy"))
        }));

        let report = verifier.run();
        assert_eq!(report.entries()[0].result.status, ProbeStatus::Fail);
        assert!(!report.has_required_failures());
    }

    #[test]
    fn each_run_evaluates_again() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut verifier = Verifier::new();
        verifier.register(Probe::required("count", Category::Environment, move || {
            counter.set(counter.get() + 1);
            Ok::<_, ProbeError>(counter.get().to_string())
        }));

        let first = verifier.run();
        let second = verifier.run();
        assert_eq!(calls.get(), 2);
        assert_eq!(first.entries()[0].result.detail, "1");
        assert_eq!(second.entries()[0].result.detail, "2");
    }

    #[test]
    fn protected_values_are_masked_everywhere() {
        let env = Environment::from_pairs([("GENAI_API_KEY", "sk-abc123")]);
        let mut verifier = Verifier::with_environment(env);
        verifier.protect_env_var("GENAI_API_KEY");
        verifier.register(Probe::required("leaky", Category::Configuration, || {
            Err::<String, _>(ProbeError::Other(anyhow::anyhow!(
                "bad header: Bearer sk-abc123"
            )))
        }));

        let report = verifier.run();
        let result = &report.entries()[0].result;
        for text in [
            Some(result.detail.as_str()),
            result.error.as_deref(),
            result.trace.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            assert!(!text.contains("sk-abc123"), "leaked in {:?}", text);
        }
        assert!(result.error.as_deref().unwrap().contains("[REDACTED]"));
    }

    #[test]
    fn summary_counts_statuses() {
        let mut verifier = Verifier::new();
        verifier.register(Probe::required("p", Category::Filesystem, ok("x")));
        verifier.register(Probe::required("f", Category::Filesystem, || {
            Err::<String, _>(ProbeError::absent("gone"))
        }));
        verifier.register(Probe::optional("s", Category::Filesystem, || {
            Err::<String, _>(ProbeError::absent("gone"))
        }));

        let report = verifier.run();
        assert_eq!(
            report.summary(),
            Summary {
                passed: 1,
                failed: 1,
                skipped: 1
            }
        );
        assert!(report.has_required_failures());
        assert_eq!(report.find("s").unwrap().result.status, ProbeStatus::Skipped);
    }

    #[test]
    fn empty_verifier_yields_empty_report() {
        let verifier = Verifier::new();
        assert!(verifier.is_empty());
        assert!(verifier.run().is_empty());
    }
}
