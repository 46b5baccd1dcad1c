//! Masking of secret values in report text.

/// Text substituted for a secret value.
pub const MASK: &str = "[REDACTED]";

/// Values shorter than this are never masked.
///
/// A short value such as `4` or `dev` matches inside unrelated text
/// (sizes, paths), so masking it would corrupt the report. Environment
/// probes never print secret values themselves.
pub const MIN_SECRET_LEN: usize = 8;

/// Replaces registered secret values with [`MASK`].
///
/// Longer secrets are replaced first so a secret that contains another
/// is never partially revealed.
#[derive(Debug, Clone, Default)]
pub struct OutputMasker {
    secrets: Vec<String>,
}

impl OutputMasker {
    /// Create a masker with no secrets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret value to be masked.
    ///
    /// Values shorter than [`MIN_SECRET_LEN`] characters and duplicates
    /// are ignored. Returns whether the value was registered.
    pub fn add_secret(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.chars().count() < MIN_SECRET_LEN || self.secrets.contains(&value) {
            return false;
        }
        self.secrets.push(value);
        self.secrets.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        true
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for secret in &self.secrets {
            if result.contains(secret.as_str()) {
                result = result.replace(secret.as_str(), MASK);
            }
        }
        result
    }

    /// Mask an optional string in place.
    pub fn mask_opt(&self, input: &mut Option<String>) {
        if let Some(text) = input {
            *text = self.mask(text);
        }
    }

    /// Number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}
