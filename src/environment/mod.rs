//! Read-only view of the process environment.
//!
//! Probes never read `std::env` directly. They go through an
//! [`Environment`], which is either the live process environment
//! (re-queried on every lookup) or a fixed map used by tests.
//!
//! # Example
//!
//! ```
//! use readycheck::environment::Environment;
//!
//! let env = Environment::from_pairs([("GENAI_API_KEY", "abc")]);
//! assert_eq!(env.var("GENAI_API_KEY").as_deref(), Some("abc"));
//! assert!(env.var("SECRET_KEY").is_none());
//! ```

pub mod path;

pub use path::{is_executable, resolve_tool_path};

use std::collections::HashMap;
use std::path::PathBuf;

/// Where environment variables come from.
#[derive(Debug, Clone, Default)]
pub enum Environment {
    /// The live process environment.
    #[default]
    Process,
    /// A fixed set of variables.
    Fixed(HashMap<String, String>),
}

impl Environment {
    /// The live process environment.
    pub fn process() -> Self {
        Self::Process
    }

    /// A fixed environment built from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable. Unset and non-UTF-8 values are both `None`.
    pub fn var(&self, key: &str) -> Option<String> {
        match self {
            Self::Process => std::env::var(key).ok(),
            Self::Fixed(vars) => vars.get(key).cloned(),
        }
    }

    /// Look up a variable, treating an empty value as unset.
    pub fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// Directories listed in `PATH`.
    pub fn path_entries(&self) -> Vec<PathBuf> {
        match self {
            Self::Process => std::env::var_os("PATH")
                .map(|path| std::env::split_paths(&path).collect())
                .unwrap_or_default(),
            Self::Fixed(vars) => vars
                .get("PATH")
                .map(|path| std::env::split_paths(path).collect())
                .unwrap_or_default(),
        }
    }
}
