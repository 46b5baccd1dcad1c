//! Configuration schema definitions.
//!
//! Defaults reproduce the catalogue of the deployment this tool was first
//! written for: a GenAI course assistant served from `config.yaml`,
//! `templates/` and `static/`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ReadycheckError, Result};

/// Root configuration structure for `readycheck.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadycheckConfig {
    /// Environment variables to report on.
    pub env: Vec<EnvVarDef>,

    /// Extra variable names treated as secrets, on top of the built-in
    /// name patterns.
    pub secret_names: Vec<String>,

    /// Asset files that must exist (relative to the project root).
    pub files: Vec<String>,

    /// Directories that must exist (relative to the project root).
    pub directories: Vec<String>,

    /// Third-party capabilities.
    pub dependencies: DependenciesConfig,

    /// The application's own configuration document.
    pub app_config: AppConfigSettings,

    /// Framework liveness settings.
    pub framework: FrameworkSettings,

    /// Template rendering settings.
    pub templates: TemplateSettings,
}

impl Default for ReadycheckConfig {
    fn default() -> Self {
        Self {
            env: vec![
                EnvVarDef::new("GENAI_API_KEY", EnvDisplay::Length, true),
                EnvVarDef::new("CONFIG_FILE", EnvDisplay::Value, false),
                EnvVarDef::new("SECRET_KEY", EnvDisplay::Presence, false),
            ],
            secret_names: Vec::new(),
            files: [
                "config.yaml",
                "templates/index.html",
                "static/lattice_ai_icon.png",
                "static/purdue-genai-studio-logo.png",
            ]
            .map(String::from)
            .to_vec(),
            directories: ["templates", "static", "uploads", "logs"]
                .map(String::from)
                .to_vec(),
            dependencies: DependenciesConfig::default(),
            app_config: AppConfigSettings::default(),
            framework: FrameworkSettings::default(),
            templates: TemplateSettings::default(),
        }
    }
}

impl ReadycheckConfig {
    /// Check values serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(ReadycheckError::ConfigValidationError { message });

        if let Some(def) = self.env.iter().find(|d| d.name.trim().is_empty()) {
            return invalid(format!("environment variable entry has empty name: {:?}", def));
        }
        if self.files.iter().chain(&self.directories).any(|p| p.trim().is_empty()) {
            return invalid("file and directory paths must not be empty".to_string());
        }
        let deps = self
            .dependencies
            .required
            .iter()
            .chain(&self.dependencies.optional);
        for dep in deps {
            if dep.target().trim().is_empty() {
                return invalid("dependency entries must name a module or executable".to_string());
            }
        }
        if !self.framework.route.starts_with('/') {
            return invalid(format!(
                "framework.route must start with '/': {}",
                self.framework.route
            ));
        }
        if !(100..=599).contains(&self.framework.expected_status) {
            return invalid(format!(
                "framework.expected_status out of range: {}",
                self.framework.expected_status
            ));
        }
        Ok(())
    }
}

/// How an environment variable is shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvDisplay {
    /// Show the value itself. Ignored for secret-looking names.
    Value,
    /// Show only whether it is set.
    Presence,
    /// Show whether it is set and its length.
    Length,
}

/// One environment variable probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVarDef {
    /// Variable name.
    pub name: String,

    /// Display policy. Defaults to `length` for secret-looking names and
    /// `value` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<EnvDisplay>,

    /// Whether an unset variable is a failure.
    #[serde(default)]
    pub required: bool,
}

impl EnvVarDef {
    /// Create a definition with an explicit display policy.
    pub fn new(name: &str, show: EnvDisplay, required: bool) -> Self {
        Self {
            name: name.to_string(),
            show: Some(show),
            required,
        }
    }
}

/// Dependency lists and how modules are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependenciesConfig {
    /// Interpreter used to resolve `module` dependencies.
    pub interpreter: String,

    /// Capabilities whose absence is a failure.
    pub required: Vec<DependencyDef>,

    /// Capabilities whose absence is only skipped.
    pub optional: Vec<DependencyDef>,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            required: ["flask", "flask_cors", "flask_limiter", "yaml", "requests"]
                .into_iter()
                .map(|m| DependencyDef::Name(m.to_string()))
                .collect(),
            optional: vec![
                DependencyDef::Module {
                    module: "pypdf2".to_string(),
                    name: Some("PyPDF2".to_string()),
                },
                DependencyDef::Name("pandas".to_string()),
            ],
        }
    }
}

/// A third-party capability.
///
/// A bare string is shorthand for a module of the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyDef {
    /// `- flask`
    Name(String),
    /// `- { module: pypdf2, name: PyPDF2 }`
    Module {
        module: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// `- { executable: pdftotext }`
    Executable {
        executable: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl DependencyDef {
    /// Name shown in the report.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Name(module) => module,
            Self::Module { module, name } => name.as_deref().unwrap_or(module),
            Self::Executable { executable, name } => name.as_deref().unwrap_or(executable),
        }
    }

    /// The module or executable being resolved.
    pub fn target(&self) -> &str {
        match self {
            Self::Name(module) | Self::Module { module, .. } => module,
            Self::Executable { executable, .. } => executable,
        }
    }
}

/// Where the application's configuration lives and what to show from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfigSettings {
    /// Environment variable overriding the path.
    pub env_override: String,

    /// Path used when the override is unset.
    pub default_path: String,

    /// Dotted fields displayed on success.
    pub fields: Vec<String>,
}

impl Default for AppConfigSettings {
    fn default() -> Self {
        Self {
            env_override: "CONFIG_FILE".to_string(),
            default_path: "config.yaml".to_string(),
            fields: vec!["course.name".to_string(), "genai.base_url".to_string()],
        }
    }
}

/// Framework liveness settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkSettings {
    /// Throwaway route registered on the target.
    pub route: String,

    /// Status code the route must answer with.
    pub expected_status: u16,
}

impl Default for FrameworkSettings {
    fn default() -> Self {
        Self {
            route: "/__readycheck".to_string(),
            expected_status: 200,
        }
    }
}

/// Template rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateSettings {
    /// Inline template source.
    pub inline: String,

    /// Context for the inline template.
    pub inline_context: Value,

    /// Named template to render; `null` disables the probe.
    pub named: Option<String>,

    /// Placeholder context for the named template.
    pub placeholders: Value,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            inline: "Hello {{ name }}".to_string(),
            inline_context: json!({ "name": "World" }),
            named: Some("index.html".to_string()),
            placeholders: json!({
                "health_status": true,
                "config": {
                    "COURSE_NAME": "TEST",
                    "ASSISTANT_NAME": "TEST",
                    "ASSISTANT_TITLE": "TEST",
                    "WELCOME_MESSAGE": "TEST",
                    "INPUT_PLACEHOLDER": "TEST",
                    "LOGO_FILE": "test.png",
                    "FOOTER_TEXT": "TEST",
                }
            }),
        }
    }
}
