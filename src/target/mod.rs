//! The application under diagnosis.
//!
//! Framework probes talk to the application only through the
//! [`TargetApp`] trait: construct it, register a throwaway route,
//! dispatch one in-process request, and render templates. The built-in
//! [`WebApp`] is an axum router with a file-backed directory of Jinja
//! templates.
//!
//! # Example
//!
//! ```
//! use readycheck::target::{TargetApp, WebApp};
//!
//! let mut app = WebApp::new(std::path::Path::new("."));
//! app.add_route("/ping", 200).unwrap();
//! assert_eq!(app.dispatch("/ping").unwrap(), 200);
//! ```

pub mod template;
pub mod web;

pub use template::{render_inline, render_named};
pub use web::WebApp;

use serde_json::Value;
use std::sync::Arc;

/// Capabilities the verifier needs from a target application.
pub trait TargetApp {
    /// Register a route that answers GET with a fixed status code.
    fn add_route(&mut self, path: &str, status: u16) -> anyhow::Result<()>;

    /// Dispatch an in-process GET request and return the status code.
    fn dispatch(&self, path: &str) -> anyhow::Result<u16>;

    /// Render an inline template source.
    fn render_inline(&self, source: &str, context: &Value) -> anyhow::Result<String>;

    /// Whether a named template is available.
    fn has_template(&self, name: &str) -> bool;

    /// Render a named template with placeholder values.
    fn render_named(&self, name: &str, context: &Value) -> anyhow::Result<String>;
}

/// Constructs a fresh target application.
///
/// Each framework probe builds its own instance so probes share no state.
pub type TargetFactory = Arc<dyn Fn() -> anyhow::Result<Box<dyn TargetApp>> + Send + Sync>;
