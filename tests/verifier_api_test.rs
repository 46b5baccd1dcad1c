//! Behavioral tests for the verifier's public API.

use readycheck::checks::{build_catalogue, CatalogueContext, APP_CONFIG_PROBE};
use readycheck::config::ReadycheckConfig;
use readycheck::environment::Environment;
use readycheck::probe::{Category, Probe, ProbeError, ProbeStatus};
use readycheck::ui::render;
use readycheck::verifier::Verifier;
use std::fs;
use tempfile::TempDir;

fn importable() -> Result<String, ProbeError> {
    Ok("importable".to_string())
}

fn not_installed() -> Result<String, ProbeError> {
    Err(ProbeError::absent("not installed"))
}

fn explodes() -> Result<String, ProbeError> {
    Err(ProbeError::Other(anyhow::anyhow!("unexpected runtime error")))
}

#[test]
fn report_length_and_order_match_registration() {
    let outcomes: [fn() -> Result<String, ProbeError>; 5] =
        [importable, explodes, not_installed, importable, explodes];

    let mut verifier = Verifier::new();
    for (i, outcome) in outcomes.into_iter().enumerate() {
        verifier.register(Probe::new(
            format!("probe-{}", i),
            Category::Dependency,
            i % 2 == 0,
            outcome,
        ));
    }

    let report = verifier.run();
    assert_eq!(report.len(), 5);
    for (i, entry) in report.entries().iter().enumerate() {
        assert_eq!(entry.probe.name, format!("probe-{}", i));
    }
}

#[test]
fn failures_are_isolated() {
    let mut verifier = Verifier::new();
    verifier.register(Probe::required("first", Category::Configuration, explodes));
    verifier.register(Probe::required("panics", Category::Configuration, || {
        let empty: Vec<u8> = Vec::new();
        Ok::<_, ProbeError>(empty[3].to_string())
    }));
    verifier.register(Probe::required("last", Category::Configuration, importable));

    let report = verifier.run();
    let statuses: Vec<_> = report.entries().iter().map(|e| e.result.status).collect();
    assert_eq!(
        statuses,
        [ProbeStatus::Fail, ProbeStatus::Fail, ProbeStatus::Pass]
    );
    assert!(report.entries()[0].result.trace.is_some());
}

#[test]
fn optional_absent_skips_required_absent_fails() {
    let mut verifier = Verifier::new();
    verifier.register(Probe::required("A", Category::Dependency, importable));
    verifier.register(Probe::optional("B", Category::Dependency, not_installed));
    verifier.register(Probe::required("C", Category::Dependency, not_installed));

    let report = verifier.run();
    let pairs: Vec<_> = report
        .entries()
        .iter()
        .map(|e| (e.probe.name.as_str(), e.result.status))
        .collect();
    assert_eq!(
        pairs,
        [
            ("A", ProbeStatus::Pass),
            ("B", ProbeStatus::Skipped),
            ("C", ProbeStatus::Fail),
        ]
    );
}

#[test]
fn render_is_byte_identical_across_calls() {
    let mut verifier = Verifier::new();
    verifier.register(Probe::required("A", Category::Dependency, importable));
    verifier.register(Probe::optional("B", Category::Dependency, not_installed));
    verifier.register(Probe::required("C", Category::FrameworkSmoke, explodes));

    let report = verifier.run();
    let first = render(&report);
    let second = render(&report);
    assert_eq!(first, second);
    assert!(first.contains("=== Dependencies ==="));
    assert!(first.contains("=== Framework ==="));
}

#[test]
fn missing_config_file_fails_and_run_continues() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("templates")).unwrap();
    fs::write(temp.path().join("templates/index.html"), "<p>{{ health_status }}</p>").unwrap();

    let context = CatalogueContext::new(temp.path().to_path_buf()).with_environment(
        Environment::from_pairs([("CONFIG_FILE", "/nonexistent/app/config.yaml")]),
    );
    let verifier = build_catalogue(&ReadycheckConfig::default(), &context);
    let report = verifier.run();

    assert_eq!(report.len(), verifier.len());
    let config = report.find(APP_CONFIG_PROBE).unwrap();
    assert_eq!(config.result.status, ProbeStatus::Fail);
    assert!(config.result.detail.contains("/nonexistent/app/config.yaml"));

    let position = report
        .entries()
        .iter()
        .position(|e| e.probe.name == APP_CONFIG_PROBE)
        .unwrap();
    let after = &report.entries()[position + 1..];
    assert!(!after.is_empty());
    assert!(after.iter().all(|e| e.result.status == ProbeStatus::Pass));
}

#[test]
fn secret_values_never_appear_in_detail() {
    let temp = TempDir::new().unwrap();
    let key = "sk-proj-0123456789abcdef";
    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs([
            ("GENAI_API_KEY", key),
            ("SECRET_KEY", "flask-session-secret"),
        ]));
    let report = build_catalogue(&ReadycheckConfig::default(), &context).run();

    for entry in report.entries() {
        assert!(!entry.result.detail.contains(key));
        assert!(!entry.result.detail.contains("flask-session-secret"));
    }
    assert_eq!(
        report.find("GENAI_API_KEY").unwrap().result.detail,
        format!("set ({} chars)", key.len())
    );
    assert_eq!(report.find("SECRET_KEY").unwrap().result.detail, "set");
    assert!(!render(&report).contains(key));
}

#[test]
fn asset_size_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("static")).unwrap();
    fs::write(temp.path().join("static/lattice_ai_icon.png"), vec![7u8; 1024]).unwrap();

    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs(Vec::<(String, String)>::new()));
    let report = build_catalogue(&ReadycheckConfig::default(), &context).run();

    let icon = report.find("static/lattice_ai_icon.png").unwrap();
    assert_eq!(icon.result.status, ProbeStatus::Pass);
    assert!(icon.result.detail.contains("1024"));
}

#[test]
fn repeated_runs_see_fresh_state() {
    let temp = TempDir::new().unwrap();
    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs(Vec::<(String, String)>::new()));
    let verifier = build_catalogue(&ReadycheckConfig::default(), &context);

    let before = verifier.run();
    assert_eq!(before.find("logs").unwrap().result.status, ProbeStatus::Fail);

    fs::create_dir_all(temp.path().join("logs")).unwrap();
    let after = verifier.run();
    assert_eq!(after.find("logs").unwrap().result.status, ProbeStatus::Pass);
    assert_eq!(before.find("logs").unwrap().result.status, ProbeStatus::Fail);
}

#[test]
fn short_secret_values_leave_details_intact() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("static")).unwrap();
    fs::write(temp.path().join("static/lattice_ai_icon.png"), vec![7u8; 1024]).unwrap();

    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs([("SECRET_KEY", "4")]));
    let report = build_catalogue(&ReadycheckConfig::default(), &context).run();

    let icon = report.find("static/lattice_ai_icon.png").unwrap();
    assert_eq!(icon.result.status, ProbeStatus::Pass);
    assert_eq!(icon.result.detail, "1024 bytes");
    assert!(!render(&report).contains("[REDACTED]"));
}

#[test]
fn jinja_index_template_passes() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("templates")).unwrap();
    fs::write(
        temp.path().join("templates/index.html"),
        "{% if health_status %}<img src=\"{{ url_for('static', filename=config.LOGO_FILE) }}\">{% endif %}",
    )
    .unwrap();

    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs(Vec::<(String, String)>::new()));
    let report = build_catalogue(&ReadycheckConfig::default(), &context).run();

    let index = report.find("index.html").unwrap();
    assert_eq!(index.result.status, ProbeStatus::Pass);
    assert_eq!(index.result.detail, "rendered 28 bytes");
}
