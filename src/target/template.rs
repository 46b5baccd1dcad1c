//! Jinja template rendering for the built-in target.
//!
//! Templates are rendered with minijinja, so Flask-style templates work
//! unchanged: block tags, filters, comments and `url_for`. Undefined
//! variables render as empty, as they do under Flask's default settings.
//! Templates named `*.html` or `*.htm` are HTML-escaped.

use std::sync::LazyLock;

use minijinja::value::{Kwargs, Value as JinjaValue};
use minijinja::{AutoEscape, Environment, Error};
use serde_json::Value;

/// Endpoint name that maps to the static files directory.
pub const STATIC_ENDPOINT: &str = "static";

static ENVIRONMENT: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(escape_for_name);
    env.add_function("url_for", url_for);
    env
});

fn escape_for_name(name: &str) -> AutoEscape {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        AutoEscape::Html
    } else {
        AutoEscape::None
    }
}

/// Build a URL for an endpoint without a running application.
///
/// `url_for('static', filename='a.png')` gives `/static/a.png`; any other
/// endpoint gives `/<endpoint>`. Remaining keyword arguments become query
/// parameters in name order. The URL is marked safe so HTML templates
/// do not escape its slashes.
fn url_for(endpoint: String, kwargs: Kwargs) -> Result<JinjaValue, Error> {
    let mut url = if endpoint == STATIC_ENDPOINT {
        let filename: String = kwargs.get("filename")?;
        format!("/{}/{}", STATIC_ENDPOINT, filename.trim_start_matches('/'))
    } else {
        format!("/{}", endpoint.trim_start_matches('/'))
    };

    let mut keys: Vec<&str> = kwargs
        .args()
        .filter(|key| !(endpoint == STATIC_ENDPOINT && *key == "filename"))
        .collect();
    keys.sort_unstable();
    let mut query = Vec::with_capacity(keys.len());
    for key in keys {
        let value: JinjaValue = kwargs.get(key)?;
        query.push(format!("{}={}", key, value));
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }
    Ok(JinjaValue::from_safe_string(url))
}

/// Render an inline template source. Output is never escaped.
pub fn render_inline(source: &str, context: &Value) -> Result<String, Error> {
    ENVIRONMENT.render_str(source, context)
}

/// Render a template source under `name`, escaping by its extension.
pub fn render_named(name: &str, source: &str, context: &Value) -> Result<String, Error> {
    ENVIRONMENT.render_named_str(name, source, context)
}
