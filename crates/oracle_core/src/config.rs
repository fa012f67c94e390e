//! Engine configuration.
//!
//! Hardcoded defaults, overridable through a TOML file. Invalid or
//! missing files fall back to defaults with a logged warning rather
//! than aborting startup.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! demo_miner_count = 6
//! demo_validator_count = 3
//! historical_probability = 0.7
//! miner_emission_share = 0.41
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters of the simulation engine and orchestrator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OracleConfig {
    /// Miners consulted per demo scenario run.
    pub demo_miner_count: usize,
    /// Validators consulted per demo scenario run.
    pub demo_validator_count: usize,
    /// Probability a freeform challenge is classified historical.
    pub historical_probability: f64,
    /// Fraction of the emission pool distributed to miners.
    pub miner_emission_share: f64,
    /// Range of the demo reward pool draw.
    pub demo_pool_min: f64,
    pub demo_pool_max: f64,
    /// Probability a synthesized ground truth includes an extreme event.
    pub extreme_event_probability: f64,
    /// Bound on the retained challenge history.
    pub challenge_history_limit: usize,
    pub subnet_version: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            demo_miner_count: 6,
            demo_validator_count: 3,
            historical_probability: 0.7,
            miner_emission_share: 0.41,
            demo_pool_min: 0.08,
            demo_pool_max: 0.42,
            extreme_event_probability: 0.3,
            challenge_history_limit: 50,
            subnet_version: "1.0.0-beta".to_string(),
        }
    }
}

impl OracleConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults when
    /// the file is absent or invalid.
    #[must_use]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded oracle configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid configuration, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.demo_miner_count > 0, "Demo miner count must be positive");
        anyhow::ensure!(
            self.demo_validator_count > 0,
            "Demo validator count must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.historical_probability),
            "Historical probability must be within [0, 1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.miner_emission_share),
            "Miner emission share must be within [0, 1]"
        );
        anyhow::ensure!(
            self.demo_pool_min < self.demo_pool_max,
            "Demo pool range must be non-empty"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.extreme_event_probability),
            "Extreme event probability must be within [0, 1]"
        );
        anyhow::ensure!(
            self.challenge_history_limit > 0,
            "Challenge history limit must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(OracleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = OracleConfig::from_toml("demo_miner_count = 4\n").unwrap();
        assert_eq!(config.demo_miner_count, 4);
        assert_eq!(config.demo_validator_count, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(OracleConfig::from_toml("historical_probability = 1.7\n").is_err());
        assert!(OracleConfig::from_toml("demo_miner_count = 0\n").is_err());
    }
}
