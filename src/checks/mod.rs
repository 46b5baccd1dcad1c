//! Built-in probe catalogue.
//!
//! [`build_catalogue`] turns a [`ReadycheckConfig`] into a [`Verifier`]
//! loaded with one probe per configured item, in a fixed order:
//! environment, files, directories, dependencies (required first),
//! application config, framework liveness, inline template and named
//! template.
//!
//! # Example
//!
//! ```
//! use readycheck::checks::{build_catalogue, CatalogueContext};
//! use readycheck::config::ReadycheckConfig;
//! use readycheck::environment::Environment;
//!
//! let context = CatalogueContext::new(".".into())
//!     .with_environment(Environment::from_pairs([("GENAI_API_KEY", "sk-1")]));
//! let verifier = build_catalogue(&ReadycheckConfig::default(), &context);
//! assert_eq!(verifier.probes()[0].info().name, "GENAI_API_KEY");
//! ```

pub mod app_config;
pub mod deps;
pub mod env;
pub mod fs;
pub mod framework;

pub use app_config::AppConfigCheck;
pub use deps::{ExecutableCheck, ModuleCheck};
pub use env::EnvVarCheck;
pub use fs::{DirectoryCheck, FileCheck};
pub use framework::{InlineTemplateCheck, LivenessCheck, NamedTemplateCheck};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{DependencyDef, EnvDisplay, ReadycheckConfig};
use crate::environment::Environment;
use crate::probe::{Category, Probe};
use crate::secrets::SecretMatcher;
use crate::target::{TargetFactory, WebApp};
use crate::verifier::Verifier;

/// Probe name for the application config check.
pub const APP_CONFIG_PROBE: &str = "app config";
/// Probe name for the framework liveness check.
pub const LIVENESS_PROBE: &str = "framework liveness";
/// Probe name for the inline template check.
pub const INLINE_TEMPLATE_PROBE: &str = "inline template";

/// What the catalogue probes.
#[derive(Clone)]
pub struct CatalogueContext {
    /// Project root; relative paths resolve against it.
    pub root: PathBuf,
    /// Environment the probes read.
    pub env: Environment,
    /// Builds the target application.
    pub target: TargetFactory,
}

impl CatalogueContext {
    /// Probe `root` with the live environment and the built-in web target.
    pub fn new(root: PathBuf) -> Self {
        Self {
            target: WebApp::factory(root.clone()),
            env: Environment::process(),
            root,
        }
    }

    /// Read variables from `env` instead of the process.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Probe a different target application.
    pub fn with_target(mut self, target: TargetFactory) -> Self {
        self.target = target;
        self
    }
}

impl std::fmt::Debug for CatalogueContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueContext")
            .field("root", &self.root)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}

/// Build a verifier holding the configured catalogue.
pub fn build_catalogue(config: &ReadycheckConfig, context: &CatalogueContext) -> Verifier {
    let mut verifier = Verifier::with_environment(context.env.clone());
    let matcher = SecretMatcher::with_builtins_and_custom(&config.secret_names);

    for def in &config.env {
        let mut check = EnvVarCheck::new(def, &matcher, context.env.clone());
        if def.name == config.app_config.env_override {
            check = check.with_fallback(config.app_config.default_path.clone());
        }
        if check.display() != EnvDisplay::Value {
            verifier.protect_env_var(def.name.clone());
        }
        verifier.register(Probe::new(
            def.name.clone(),
            Category::Environment,
            def.required,
            check,
        ));
    }

    for file in &config.files {
        let check = FileCheck::new(file.clone(), context.root.join(file));
        verifier.register(Probe::required(file.clone(), Category::Filesystem, check));
    }

    for dir in &config.directories {
        let check = DirectoryCheck::new(dir.clone(), context.root.join(dir));
        verifier.register(Probe::required(dir.clone(), Category::Directory, check));
    }

    let deps = &config.dependencies;
    let all_deps = deps
        .required
        .iter()
        .map(|d| (d, true))
        .chain(deps.optional.iter().map(|d| (d, false)));
    for (dep, required) in all_deps {
        let probe = match dep {
            DependencyDef::Executable { executable, .. } => Probe::new(
                dep.display_name(),
                Category::Dependency,
                required,
                ExecutableCheck::new(executable.clone(), context.env.clone()),
            ),
            _ => Probe::new(
                dep.display_name(),
                Category::Dependency,
                required,
                ModuleCheck::new(dep.target(), deps.interpreter.clone(), context.env.clone()),
            ),
        };
        verifier.register(probe);
    }

    verifier.register(Probe::required(
        APP_CONFIG_PROBE,
        Category::Configuration,
        AppConfigCheck::new(
            config.app_config.clone(),
            context.root.clone(),
            context.env.clone(),
        ),
    ));

    verifier.register(Probe::required(
        LIVENESS_PROBE,
        Category::FrameworkSmoke,
        LivenessCheck::new(
            Arc::clone(&context.target),
            config.framework.route.clone(),
            config.framework.expected_status,
        ),
    ));

    let templates = &config.templates;
    verifier.register(Probe::required(
        INLINE_TEMPLATE_PROBE,
        Category::FrameworkSmoke,
        InlineTemplateCheck::new(
            Arc::clone(&context.target),
            templates.inline.clone(),
            templates.inline_context.clone(),
        ),
    ));

    if let Some(name) = &templates.named {
        verifier.register(Probe::required(
            name.clone(),
            Category::FrameworkSmoke,
            NamedTemplateCheck::new(
                Arc::clone(&context.target),
                name.clone(),
                templates.placeholders.clone(),
            ),
        ));
    }

    tracing::debug!(probes = verifier.len(), "catalogue built");
    verifier
}
