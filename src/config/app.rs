//! Main application configuration
//!
//! This module defines the primary configuration structures for the rpi-engine
//! command line front end, including environment variable loading, TOML file
//! loading and validation.

use crate::config::coefficients::RpiCoefficients;
use crate::config::sport::{CoefficientProvider, DEFAULT_SPORT};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    /// Explicit coefficient set; wins over the sport profile when present
    #[serde(default)]
    pub coefficients: Option<RpiCoefficients>,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Rating engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Sport profile used to pick default coefficients
    pub sport: String,
    /// Roster size from which per-team aggregation runs in parallel
    pub parallel_threshold: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rpi-engine".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sport: DEFAULT_SPORT.to_string(),
            parallel_threshold: 256,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text without consulting the environment
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration file: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(sport) = env::var("RPI_SPORT") {
            self.engine.sport = sport;
        }
        if let Ok(threshold) = env::var("RPI_PARALLEL_THRESHOLD") {
            self.engine.parallel_threshold = threshold
                .parse()
                .map_err(|_| anyhow!("Invalid RPI_PARALLEL_THRESHOLD value: {}", threshold))?;
        }
        Ok(())
    }

    /// Pick the coefficient set for this configuration
    ///
    /// An explicit `[coefficients]` table wins; otherwise the configured
    /// sport is looked up in the provider.
    pub fn resolve_coefficients(
        &self,
        provider: &dyn CoefficientProvider,
    ) -> crate::error::Result<RpiCoefficients> {
        let coefficients = match &self.coefficients {
            Some(coefficients) => coefficients.clone(),
            None => provider.coefficients_for(&self.engine.sport)?,
        };
        coefficients.validate()?;
        Ok(coefficients)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.engine.sport.trim().is_empty() {
        return Err(anyhow!("Sport cannot be empty"));
    }

    if let Some(coefficients) = &config.coefficients {
        coefficients.validate()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sport::StaticCoefficientProvider;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.engine.sport, DEFAULT_SPORT);
        assert!(config.coefficients.is_none());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [engine]
            sport = "soccer"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.sport, "soccer");
        assert_eq!(config.engine.parallel_threshold, 256);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_resolve_from_sport_profile() {
        let provider = StaticCoefficientProvider::new();
        let mut config = AppConfig::default();
        config.engine.sport = "football".to_string();

        let coefficients = config.resolve_coefficients(&provider).unwrap();
        assert_eq!(coefficients.name, "football");
        assert_eq!(coefficients.min_games, 4);
    }

    #[test]
    fn test_explicit_coefficients_win() {
        let provider = StaticCoefficientProvider::new();
        let config = AppConfig::from_toml_str(
            r#"
            [engine]
            sport = "football"

            [coefficients]
            name = "league-office"
            clwp_coeff = 0.2
            oclwp_coeff = 0.5
            ooclwp_coeff = 0.3
            diff_coeff = 0.0
            domination_coeff = 0.0
            min_games = 3
            diff_interval = 10.0
            clgw_step = 0.0
            clgl_step = 0.0
            "#,
        )
        .unwrap();

        let coefficients = config.resolve_coefficients(&provider).unwrap();
        assert_eq!(coefficients.name, "league-office");
        assert_eq!(coefficients.min_games, 3);
    }

    #[test]
    fn test_invalid_coefficients_rejected_at_load() {
        let result = AppConfig::from_toml_str(
            r#"
            [coefficients]
            name = "broken"
            clwp_coeff = 0.2
            oclwp_coeff = 0.5
            ooclwp_coeff = 0.3
            diff_coeff = 0.0
            domination_coeff = 0.0
            min_games = 0
            diff_interval = 10.0
            clgw_step = 0.0
            clgl_step = 0.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_sport_fails_resolution() {
        let provider = StaticCoefficientProvider::new();
        let mut config = AppConfig::default();
        config.engine.sport = "quidditch".to_string();
        assert!(config.resolve_coefficients(&provider).is_err());
    }
}
