//! Report rendering.
//!
//! Rendering only formats collected results; it never re-runs a probe.
//! The same report and options always produce the same string.

use std::fmt::Write as _;

use super::icons;
use super::theme::Theme;
use crate::probe::{Category, ProbeStatus};
use crate::verifier::{Report, ReportEntry};

const TITLE: &str = "Readiness Report";
const RULE_WIDTH: usize = 50;

/// How to render a report.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Colours.
    pub theme: Theme,
    /// Print captured traces under failing probes.
    pub show_traces: bool,
}

impl RenderOptions {
    /// Plain text, no traces.
    pub fn plain() -> Self {
        Self {
            theme: Theme::plain(),
            show_traces: false,
        }
    }
}

/// Render with the plain theme.
pub fn render(report: &Report) -> String {
    render_with(report, &RenderOptions::plain())
}

/// Render with explicit options.
pub fn render_with(report: &Report, options: &RenderOptions) -> String {
    let theme = &options.theme;
    let mut out = String::new();

    let _ = writeln!(out, "{}", theme.highlight.apply_to(TITLE));
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "{}",
        theme.dim.apply_to(format!(
            "Generated: {}",
            report.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
        ))
    );

    let mut seen: Vec<Category> = Vec::new();
    for entry in report.entries() {
        let category = entry.probe.category;
        if !seen.contains(&category) {
            seen.push(category);
            out.push('\n');
            let _ = writeln!(
                out,
                "{}",
                theme.header.apply_to(format!("=== {} ===", category.title()))
            );
        }
        render_entry(&mut out, entry, options);
    }

    let summary = report.summary();
    out.push('\n');
    let _ = writeln!(
        out,
        "{} passed, {} failed, {} skipped",
        summary.passed, summary.failed, summary.skipped
    );
    out
}

fn render_entry(out: &mut String, entry: &ReportEntry, options: &RenderOptions) {
    let theme = &options.theme;
    let result = &entry.result;

    let mut line = format!(
        "{} {}",
        icons::styled(result.status, theme),
        entry.probe.name
    );
    if !result.detail.is_empty() {
        let _ = write!(line, ": {}", result.detail);
    }
    if !entry.probe.required {
        let _ = write!(line, " {}", theme.dim.apply_to("(optional)"));
    }
    let _ = writeln!(out, "{}", line);

    if result.status != ProbeStatus::Fail {
        return;
    }
    if let Some(error) = result.error.as_deref().filter(|e| *e != result.detail) {
        let _ = writeln!(out, "    {}", theme.error.apply_to(format!("error: {}", error)));
    }
    if options.show_traces {
        if let Some(trace) = &result.trace {
            for trace_line in trace.lines() {
                let _ = writeln!(out, "      {}", theme.trace.apply_to(trace_line));
            }
        }
    }
}
