//! Configuration loading from TOML files

mod debuffs;
mod healing;
mod health;

pub use debuffs::{default_debuffs, DebuffConfig};
pub use healing::{HealerConfig, HealingConfig};
pub use health::HealthConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Everything needed to build damage models and healing items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstAidConfig {
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub healing: HealingConfig,
    #[serde(default = "default_debuffs")]
    pub debuffs: Vec<DebuffConfig>,
}

impl Default for FirstAidConfig {
    fn default() -> Self {
        FirstAidConfig {
            health: HealthConfig::default(),
            healing: HealingConfig::default(),
            debuffs: default_debuffs(),
        }
    }
}

impl FirstAidConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.health.validate()?;
        self.healing.validate()?;
        for debuff in &self.debuffs {
            debuff.validate()?;
        }
        Ok(())
    }
}

/// Load and validate a config file
pub fn load_config(path: &Path) -> Result<FirstAidConfig, ConfigError> {
    let config: FirstAidConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a config string
pub fn parse_config(content: &str) -> Result<FirstAidConfig, ConfigError> {
    let config: FirstAidConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DebuffSlot, PlayerPart};

    #[test]
    fn test_default_config_is_valid() {
        assert!(FirstAidConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.debuffs.len(), default_debuffs().len());
        assert!((config.health.max_health(PlayerPart::Body) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[health]
head = 5.0
feet = 2.0

[healing.bandage]
heal_per_cycle = 2.0
ticks_per_heal = 100
max_heals = 3

[[debuffs]]
type = "on_hit"
slot = "head"
effect = "nausea"
thresholds = [{ damage = 3.0, duration_ticks = 200 }]

[[debuffs]]
type = "constant"
slot = "legs_and_feet"
effect = "slowness"
thresholds = [
    { health_fraction = 0.5, amplifier = 1 },
    { health_fraction = 0.8, amplifier = 0 },
]
"#;

        let config = parse_config(toml).unwrap();
        assert!((config.health.max_health(PlayerPart::Head) - 5.0).abs() < f64::EPSILON);
        assert!((config.health.max_health(PlayerPart::LeftFoot) - 2.0).abs() < f64::EPSILON);
        assert!((config.health.max_health(PlayerPart::Body) - 6.0).abs() < f64::EPSILON);
        assert_eq!(config.healing.bandage.max_heals, 3);
        assert_eq!(config.healing.plaster, HealerConfig::plaster());
        assert_eq!(config.debuffs.len(), 2);
        assert_eq!(config.debuffs[1].slot(), DebuffSlot::LegsAndFeet);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let toml = r#"
[health]
body = 0.0
"#;
        assert!(matches!(parse_config(toml), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/first_aid.toml");
        let config = load_config(&path).unwrap();
        let defaults = FirstAidConfig::default();
        assert_eq!(config.health, defaults.health);
        assert_eq!(config.healing, defaults.healing);
        assert_eq!(config.debuffs, defaults.debuffs);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(parse_config("health = ["), Err(ConfigError::ParseError(_))));
    }
}
