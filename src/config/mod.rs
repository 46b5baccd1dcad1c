//! Tool configuration.
//!
//! The probe catalogue is described by an optional `readycheck.yml` in
//! the project root. Every section has defaults, so an absent file (or an
//! empty one) yields the built-in catalogue.
//!
//! # Example
//!
//! ```
//! use readycheck::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("files: [app.py]\n", Path::new("readycheck.yml")).unwrap();
//! assert_eq!(config.files, vec!["app.py".to_string()]);
//! // Untouched sections keep their defaults
//! assert_eq!(config.app_config.default_path, "config.yaml");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigSource, CONFIG_FILE_NAMES};
pub use schema::{
    AppConfigSettings, DependenciesConfig, DependencyDef, EnvDisplay, EnvVarDef,
    FrameworkSettings, ReadycheckConfig, TemplateSettings,
};
