//! Opaque secret strings read from the environment

use std::fmt;

use serde::Deserialize;

/// A credential that never shows up in logs or debug output.
///
/// Only deserializable; the raw value leaves through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Byte-for-byte comparison against user input
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes() == candidate.as_bytes()
    }

    /// Raw value, for handing to an external client
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let secret = Secret::new("Admin123");
        assert!(secret.matches("Admin123"));
        assert!(!secret.matches("admin123"));
        assert!(!secret.matches("Admin123 "));
        assert!(!secret.matches(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let secret = Secret::new("hf_abcdef");
        assert_eq!(format!("{:?}", secret), "Secret(***)");
        assert_eq!(secret.expose(), "hf_abcdef");
    }
}
