//! Guide configuration from a JSON file and the environment

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::secret::Secret;

/// Path to an optional JSON config file
pub const ENV_CONFIG_FILE: &str = "LLM_GUIDE_CONFIG";
/// Where feedback rows are stored
pub const ENV_FEEDBACK_PATH: &str = "LLM_GUIDE_FEEDBACK_PATH";
/// Passphrase gating the bulk delete
pub const ENV_ADMIN_PASSPHRASE: &str = "LLM_GUIDE_ADMIN_PASSPHRASE";
/// Credential for the hosted text-generation service
pub const ENV_API_KEY: &str = "HUGGINGFACE_API_KEY";

pub const DEFAULT_FEEDBACK_PATH: &str = "feedback.csv";

/// Errors while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for one running guide
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// CSV file holding feedback rows
    pub feedback_path: PathBuf,

    /// Unset disables the bulk delete
    pub admin_passphrase: Option<Secret>,

    /// Passed through untouched to the text-generation client
    pub api_key: Option<Secret>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            feedback_path: PathBuf::from(DEFAULT_FEEDBACK_PATH),
            admin_passphrase: None,
            api_key: None,
        }
    }
}

impl GuideConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// The JSON file named by `LLM_GUIDE_CONFIG` is read first; individual
    /// variables then override its values. Empty variables count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = match var(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(path) = var(ENV_FEEDBACK_PATH) {
            config.feedback_path = PathBuf::from(path);
        }
        if let Some(passphrase) = var(ENV_ADMIN_PASSPHRASE) {
            config.admin_passphrase = Some(Secret::new(passphrase));
        }
        if let Some(key) = var(ENV_API_KEY) {
            config.api_key = Some(Secret::new(key));
        }

        // An empty passphrase in the file would let anyone clear feedback
        if config.admin_passphrase.as_ref().is_some_and(Secret::is_empty) {
            config.admin_passphrase = None;
        }

        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = GuideConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GuideConfig::default());
        assert_eq!(config.feedback_path, PathBuf::from("feedback.csv"));
        assert!(config.admin_passphrase.is_none());
    }

    #[test]
    fn test_environment_values() {
        let config = GuideConfig::from_lookup(lookup(&[
            (ENV_FEEDBACK_PATH, "/data/fb.csv"),
            (ENV_ADMIN_PASSPHRASE, "s3cret"),
            (ENV_API_KEY, "hf_token"),
        ]))
        .unwrap();

        assert_eq!(config.feedback_path, PathBuf::from("/data/fb.csv"));
        assert!(config.admin_passphrase.unwrap().matches("s3cret"));
        assert_eq!(config.api_key.unwrap().expose(), "hf_token");
    }

    #[test]
    fn test_file_then_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("guide.json");
        std::fs::write(
            &file,
            r#"{"feedback_path": "from-file.csv", "admin_passphrase": "file-pass"}"#,
        )
        .unwrap();
        let file_str = file.to_string_lossy().to_string();

        let config =
            GuideConfig::from_lookup(lookup(&[(ENV_CONFIG_FILE, file_str.as_str())])).unwrap();
        assert_eq!(config.feedback_path, PathBuf::from("from-file.csv"));
        assert!(config.admin_passphrase.as_ref().unwrap().matches("file-pass"));

        let config = GuideConfig::from_lookup(lookup(&[
            (ENV_CONFIG_FILE, file_str.as_str()),
            (ENV_FEEDBACK_PATH, "override.csv"),
        ]))
        .unwrap();
        assert_eq!(config.feedback_path, PathBuf::from("override.csv"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = GuideConfig::from_lookup(lookup(&[
            (ENV_ADMIN_PASSPHRASE, "s3cret"),
            (ENV_API_KEY, "hf_token"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(!printed.contains("hf_token"));
        assert!(printed.contains("Secret(***)"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = GuideConfig::from_lookup(lookup(&[
            (ENV_FEEDBACK_PATH, "  "),
            (ENV_ADMIN_PASSPHRASE, ""),
        ]))
        .unwrap();
        assert_eq!(config, GuideConfig::default());
    }

    #[test]
    fn test_bad_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = GuideConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = GuideConfig::from_file(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
