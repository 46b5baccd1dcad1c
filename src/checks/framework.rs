//! Framework smoke probes.
//!
//! Every probe builds its own target through the factory, so a route
//! registered by the liveness probe is never seen by the template probes.

use serde_json::Value;

use crate::probe::{Check, ProbeError};
use crate::target::TargetFactory;

/// Registers a throwaway route and dispatches one request to it.
pub struct LivenessCheck {
    factory: TargetFactory,
    route: String,
    expected: u16,
}

impl LivenessCheck {
    /// Create a check expecting `route` to answer with `expected`.
    pub fn new(factory: TargetFactory, route: impl Into<String>, expected: u16) -> Self {
        Self {
            factory,
            route: route.into(),
            expected,
        }
    }
}

impl Check for LivenessCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let mut app = (self.factory)()?;
        app.add_route(&self.route, self.expected)?;
        let status = app.dispatch(&self.route)?;
        if status == self.expected {
            Ok(status.to_string())
        } else {
            Err(ProbeError::mismatch(self.expected.to_string(), status.to_string()))
        }
    }
}

/// Renders an inline template.
pub struct InlineTemplateCheck {
    factory: TargetFactory,
    source: String,
    context: Value,
}

impl InlineTemplateCheck {
    pub fn new(factory: TargetFactory, source: impl Into<String>, context: Value) -> Self {
        Self {
            factory,
            source: source.into(),
            context,
        }
    }
}

impl Check for InlineTemplateCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let app = (self.factory)()?;
        let rendered = app.render_inline(&self.source, &self.context)?;
        Ok(format!("'{}'", rendered))
    }
}

/// Renders a named template with placeholder values.
pub struct NamedTemplateCheck {
    factory: TargetFactory,
    name: String,
    placeholders: Value,
}

impl NamedTemplateCheck {
    pub fn new(factory: TargetFactory, name: impl Into<String>, placeholders: Value) -> Self {
        Self {
            factory,
            name: name.into(),
            placeholders,
        }
    }
}

impl Check for NamedTemplateCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let app = (self.factory)()?;
        if !app.has_template(&self.name) {
            return Err(ProbeError::absent(format!("template {} not found", self.name)));
        }
        let rendered = app.render_named(&self.name, &self.placeholders)?;
        Ok(format!("rendered {} bytes", rendered.len()))
    }
}
