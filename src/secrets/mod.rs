//! Secret classification and masking.
//!
//! Environment probes report secrets by presence or length only. This
//! module provides the two pieces that enforce it:
//!
//! - [`SecretMatcher`] - decides whether a variable name holds a secret
//! - [`OutputMasker`] - scrubs known secret values out of report text
//!
//! # Example
//!
//! ```
//! use readycheck::secrets::{OutputMasker, SecretMatcher};
//!
//! let matcher = SecretMatcher::with_builtins();
//! assert!(matcher.is_secret("GENAI_API_KEY"));
//! assert!(!matcher.is_secret("CONFIG_FILE"));
//!
//! let mut masker = OutputMasker::new();
//! masker.add_secret("sk-live-123");
//! assert_eq!(masker.mask("key=sk-live-123"), "key=[REDACTED]");
//! ```

pub mod mask;
pub mod pattern;

pub use mask::{OutputMasker, MASK, MIN_SECRET_LEN};
pub use pattern::{SecretMatcher, BUILTIN_PATTERNS};
