//! Built-in axum-backed target application.
//!
//! Requests are dispatched in-process with `tower::ServiceExt::oneshot`
//! on a throwaway current-thread runtime; no socket is ever bound.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use super::template;
use super::{TargetApp, TargetFactory};

/// Directory, relative to the project root, holding named templates.
pub const TEMPLATES_DIR: &str = "templates";

/// A minimal web application: fixed-status routes plus file templates.
#[derive(Debug, Clone)]
pub struct WebApp {
    router: Router,
    paths: Vec<String>,
    templates_dir: PathBuf,
}

impl WebApp {
    /// Create an application serving templates from `<project_root>/templates`.
    pub fn new(project_root: &Path) -> Self {
        Self {
            router: Router::new(),
            paths: Vec::new(),
            templates_dir: project_root.join(TEMPLATES_DIR),
        }
    }

    /// A factory building a fresh `WebApp` for each probe.
    pub fn factory(project_root: PathBuf) -> TargetFactory {
        Arc::new(move || {
            let app: Box<dyn TargetApp> = Box::new(WebApp::new(&project_root));
            Ok::<_, anyhow::Error>(app)
        })
    }

    fn template_path(&self, name: &str) -> anyhow::Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            bail!("invalid template name '{}'", name);
        }
        Ok(self.templates_dir.join(relative))
    }
}

impl TargetApp for WebApp {
    fn add_route(&mut self, path: &str, status: u16) -> anyhow::Result<()> {
        // axum panics on malformed or duplicate paths; refuse them up front.
        if !path.starts_with('/') || path.contains(['{', '}', '*', ':']) {
            bail!("invalid route path '{}'", path);
        }
        if self.paths.iter().any(|r| r == path) {
            bail!("route '{}' is already registered", path);
        }
        let status = StatusCode::from_u16(status)
            .with_context(|| format!("invalid status code {}", status))?;

        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, get(move || async move { (status, "ok") }));
        self.paths.push(path.to_string());
        tracing::debug!(path, status = status.as_u16(), "registered route");
        Ok(())
    }

    fn dispatch(&self, path: &str) -> anyhow::Result<u16> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .with_context(|| format!("building request for '{}'", path))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .context("starting in-process runtime")?;
        let response = runtime.block_on(self.router.clone().oneshot(request))?;
        Ok(response.status().as_u16())
    }

    fn render_inline(&self, source: &str, context: &Value) -> anyhow::Result<String> {
        Ok(template::render_inline(source, context)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.template_path(name)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn render_named(&self, name: &str, context: &Value) -> anyhow::Result<String> {
        let path = self.template_path(name)?;
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("reading template {}", path.display()))?;
        let rendered = template::render_named(name, &source, context)
            .with_context(|| format!("rendering template {}", name))?;
        Ok(rendered)
    }
}
