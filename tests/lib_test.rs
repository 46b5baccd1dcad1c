//! Library integration tests.

use readycheck::ReadycheckError;

#[test]
fn error_types_are_public() {
    let err = ReadycheckError::ConfigValidationError {
        message: "framework.route must start with '/'".into(),
    };
    assert!(err.to_string().contains("framework.route"));
    assert!(err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> readycheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use readycheck::cli::Cli;

    let cli = Cli::parse_from(["readycheck", "--json", "--strict"]);
    assert!(cli.json);
    assert!(cli.strict);
}

#[test]
fn target_trait_is_implementable_downstream() {
    use readycheck::checks::{build_catalogue, CatalogueContext, LIVENESS_PROBE};
    use readycheck::config::ReadycheckConfig;
    use readycheck::environment::Environment;
    use readycheck::probe::ProbeStatus;
    use readycheck::target::{TargetApp, TargetFactory};
    use serde_json::Value;
    use std::sync::Arc;

    struct Teapot;

    impl TargetApp for Teapot {
        fn add_route(&mut self, _path: &str, _status: u16) -> anyhow::Result<()> {
            Ok(())
        }
        fn dispatch(&self, _path: &str) -> anyhow::Result<u16> {
            Ok(418)
        }
        fn render_inline(&self, source: &str, _context: &Value) -> anyhow::Result<String> {
            Ok(source.to_string())
        }
        fn has_template(&self, _name: &str) -> bool {
            false
        }
        fn render_named(&self, _name: &str, _context: &Value) -> anyhow::Result<String> {
            anyhow::bail!("no templates")
        }
    }

    let target: TargetFactory = Arc::new(|| {
        let app: Box<dyn TargetApp> = Box::new(Teapot);
        Ok::<_, anyhow::Error>(app)
    });
    let temp = tempfile::TempDir::new().unwrap();
    let context = CatalogueContext::new(temp.path().to_path_buf())
        .with_environment(Environment::from_pairs(Vec::<(String, String)>::new()))
        .with_target(target);

    let report = build_catalogue(&ReadycheckConfig::default(), &context).run();
    let liveness = report.find(LIVENESS_PROBE).unwrap();
    assert_eq!(liveness.result.status, ProbeStatus::Fail);
    assert_eq!(liveness.result.detail, "418");
}
