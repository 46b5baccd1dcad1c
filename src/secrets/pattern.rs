//! Secret name matching.
//!
//! Variables whose names look like credentials are never displayed by
//! value, whatever the configured display policy says.

use regex::Regex;
use std::sync::LazyLock;

/// Built-in patterns for common secret names.
///
/// Each tuple contains (name, regex_pattern).
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    ("api_key", r"(?i)^.*_?(API_?KEY|APIKEY)$"),
    ("secret", r"(?i)^.*_?(SECRET|SECRET_KEY)$"),
    ("token", r"(?i)^.*_?(TOKEN|ACCESS_TOKEN|AUTH_TOKEN)$"),
    ("password", r"(?i)^.*_?(PASSWORD|PASSWD|PWD)$"),
    ("credential", r"(?i)^.*_?CREDENTIALS?$"),
    ("private_key", r"(?i)^.*_?PRIVATE_KEY$"),
    (
        "connection_string",
        r"(?i)^.*(CONNECTION_STRING|DATABASE_URL)$",
    ),
];

static BUILTIN_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(name, pattern)| {
            (
                *name,
                Regex::new(pattern).expect("BUILTIN_PATTERNS must compile"),
            )
        })
        .collect()
});

/// Matches environment variable names against secret patterns.
#[derive(Debug, Clone)]
pub struct SecretMatcher {
    patterns: Vec<Regex>,
}

impl SecretMatcher {
    /// Create a matcher with the built-in patterns.
    pub fn with_builtins() -> Self {
        Self {
            patterns: BUILTIN_REGEXES.iter().map(|(_, re)| re.clone()).collect(),
        }
    }

    /// Create a matcher with built-in patterns plus exact custom names.
    pub fn with_builtins_and_custom(custom_names: &[String]) -> Self {
        let mut matcher = Self::with_builtins();
        for name in custom_names {
            if let Ok(pattern) = Regex::new(&format!("^{}$", regex::escape(name))) {
                matcher.patterns.push(pattern);
            }
        }
        matcher
    }

    /// Check if an environment variable name matches any secret pattern.
    pub fn is_secret(&self, env_name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(env_name))
    }

    /// Name of the first built-in pattern matching `env_name`.
    pub fn builtin_match(env_name: &str) -> Option<&'static str> {
        BUILTIN_REGEXES
            .iter()
            .find(|(_, re)| re.is_match(env_name))
            .map(|(name, _)| *name)
    }
}

impl Default for SecretMatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}
