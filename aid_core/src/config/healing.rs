//! Healing item parameters

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// How a healing item heals once applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealerConfig {
    pub heal_per_cycle: f64,
    pub ticks_per_heal: u32,
    pub max_heals: u32,
}

impl HealerConfig {
    pub fn bandage() -> Self {
        HealerConfig {
            heal_per_cycle: 1.0,
            ticks_per_heal: 360, // 18 seconds
            max_heals: 4,
        }
    }

    pub fn plaster() -> Self {
        HealerConfig {
            heal_per_cycle: 1.0,
            ticks_per_heal: 440, // 22 seconds
            max_heals: 2,
        }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.heal_per_cycle > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: heal_per_cycle must be positive"
            )));
        }
        if self.ticks_per_heal == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{name}: ticks_per_heal must be at least 1"
            )));
        }
        Ok(())
    }
}

/// Parameters of every healing item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealingConfig {
    #[serde(default = "HealerConfig::bandage")]
    pub bandage: HealerConfig,
    #[serde(default = "HealerConfig::plaster")]
    pub plaster: HealerConfig,
}

impl Default for HealingConfig {
    fn default() -> Self {
        HealingConfig {
            bandage: HealerConfig::bandage(),
            plaster: HealerConfig::plaster(),
        }
    }
}

impl HealingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bandage.validate("bandage")?;
        self.plaster.validate("plaster")
    }
}
