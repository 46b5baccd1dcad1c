//! Environment variable probes.

use crate::config::{EnvDisplay, EnvVarDef};
use crate::environment::Environment;
use crate::probe::{Check, ProbeError};
use crate::secrets::SecretMatcher;

/// Reports whether a variable is set, without leaking secrets.
#[derive(Debug, Clone)]
pub struct EnvVarCheck {
    name: String,
    display: EnvDisplay,
    fallback: Option<String>,
    env: Environment,
}

impl EnvVarCheck {
    /// Create a check for `def`, resolving its display policy with `matcher`.
    pub fn new(def: &EnvVarDef, matcher: &SecretMatcher, env: Environment) -> Self {
        let display = effective_display(def, matcher);
        if def.show == Some(EnvDisplay::Value) && display != EnvDisplay::Value {
            tracing::debug!(
                name = %def.name,
                pattern = SecretMatcher::builtin_match(&def.name).unwrap_or("custom"),
                "secret-looking variable shown by length only"
            );
        }
        Self {
            name: def.name.clone(),
            display,
            fallback: None,
            env,
        }
    }

    /// Name the value used when the variable is unset.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// The display policy actually applied.
    pub fn display(&self) -> EnvDisplay {
        self.display
    }
}

impl Check for EnvVarCheck {
    fn evaluate(&self) -> Result<String, ProbeError> {
        let Some(value) = self.env.non_empty_var(&self.name) else {
            return Err(ProbeError::absent(match &self.fallback {
                Some(fallback) => format!("not set (using {})", fallback),
                None => "not set".to_string(),
            }));
        };

        Ok(match self.display {
            EnvDisplay::Value => value,
            EnvDisplay::Presence => "set".to_string(),
            EnvDisplay::Length => format!("set ({} chars)", value.chars().count()),
        })
    }
}

/// Secret-looking names are never shown by value.
pub fn effective_display(def: &EnvVarDef, matcher: &SecretMatcher) -> EnvDisplay {
    let secret = matcher.is_secret(&def.name);
    match def.show {
        Some(EnvDisplay::Value) | None if secret => EnvDisplay::Length,
        Some(show) => show,
        None => EnvDisplay::Value,
    }
}
