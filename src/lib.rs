//! readycheck - Readiness diagnostics for web application deployments.
//!
//! readycheck runs an ordered catalogue of independent probes against a
//! deployed application's environment (variables, files, directories,
//! dependencies, configuration, and an in-process framework smoke test)
//! and prints one report. A failing probe never stops the probes after it.
//!
//! # Modules
//!
//! - [`probe`] - Probe descriptors, the `Check` contract and result types
//! - [`verifier`] - Sequential runner and the `Report` it produces
//! - [`checks`] - Built-in probe catalogue
//! - [`config`] - `readycheck.yml` loading and defaults
//! - [`environment`] - Environment variable and PATH access
//! - [`target`] - The application under diagnosis
//! - [`secrets`] - Secret detection and output masking
//! - [`ui`] - Report rendering
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use readycheck::probe::{Category, Probe, ProbeError};
//! use readycheck::ui::render;
//! use readycheck::verifier::Verifier;
//!
//! let mut verifier = Verifier::new();
//! verifier.register(Probe::required("disk", Category::Filesystem, || {
//!     Ok::<_, ProbeError>("1024 bytes".to_string())
//! }));
//!
//! let report = verifier.run();
//! assert!(render(&report).contains("✓ disk: 1024 bytes"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod probe;
pub mod secrets;
pub mod target;
pub mod ui;
pub mod verifier;

pub use error::{ReadycheckError, Result};
pub use verifier::{Report, Verifier};
