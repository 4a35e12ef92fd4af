//! Engine configuration loading and persistence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::regressor::{DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE};

/// Model lifetime across recommendation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetrainPolicy {
    /// Train a fresh model for every request (default)
    #[default]
    EveryRequest,
    /// Train once, then reuse the fitted model for later requests
    ReuseTrained,
}

impl std::fmt::Display for RetrainPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrainPolicy::EveryRequest => write!(f, "every-request"),
            RetrainPolicy::ReuseTrained => write!(f, "reuse-trained"),
        }
    }
}

/// Recommendation engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Training epochs per run
    pub epochs: usize,
    /// Adam learning rate
    pub learning_rate: f32,
    /// Fixed RNG seed for reproducible runs; unset draws from entropy
    pub seed: Option<u64>,
    /// Model lifetime policy
    pub retrain: RetrainPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
            retrain: RetrainPolicy::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitbuddy", "FitBuddy")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load engine configuration from the default path.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load engine configuration from an explicit path, falling back to
/// defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: EngineConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save engine configuration to the default path.
pub fn save_config(config: &EngineConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save engine configuration to an explicit path.
pub fn save_config_to(config: &EngineConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = EngineConfig::default();
        assert_eq!(config.epochs, 50);
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.seed, None);
        assert_eq!(config.retrain, RetrainPolicy::EveryRequest);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = EngineConfig {
            epochs: 80,
            learning_rate: 0.005,
            seed: Some(1234),
            retrain: RetrainPolicy::ReuseTrained,
        };

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "epochs = \"lots\"").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_retrain_policy_serializes_kebab_case() {
        let config = EngineConfig {
            retrain: RetrainPolicy::ReuseTrained,
            ..Default::default()
        };
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("reuse-trained"));
        assert_eq!(RetrainPolicy::EveryRequest.to_string(), "every-request");
    }
}
