//! Top-level normalizer configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{MatchingConfig, ObservabilityConfig, ScorerKind, TaxonomyConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RELNORM_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub matching: MatchingConfig,
    pub taxonomy: TaxonomyConfig,
    pub observability: ObservabilityConfig,
}

impl NormalizerConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: NormalizerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Compiled defaults plus environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: NormalizerConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.matching.fuzzy_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "matching.fuzzy_threshold".to_string(),
                message: format!("must be between 0 and 100, got {threshold}"),
            });
        }
        if let Some(path) = &self.taxonomy.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "taxonomy.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply `RELNORM_*` environment variables. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("RELNORM_FUZZY_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.matching.fuzzy_threshold = value,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid RELNORM_FUZZY_THRESHOLD"),
            }
        }
        if let Some(raw) = lookup("RELNORM_SCORER") {
            match ScorerKind::from_str_name(raw.trim()) {
                Some(kind) => self.matching.scorer = kind,
                None => tracing::warn!(value = %raw, "ignoring unknown RELNORM_SCORER"),
            }
        }
        if let Some(raw) = lookup("RELNORM_TAXONOMY_PATH") {
            if !raw.trim().is_empty() {
                self.taxonomy.path = Some(raw);
            }
        }
    }
}
