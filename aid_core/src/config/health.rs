//! Per-part maximum health

use super::ConfigError;
use crate::types::PlayerPart;
use serde::{Deserialize, Serialize};

/// Maximum health of each part; left and right share a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_head")]
    pub head: f64,
    #[serde(default = "default_body")]
    pub body: f64,
    #[serde(default = "default_limb")]
    pub arms: f64,
    #[serde(default = "default_limb")]
    pub legs: f64,
    #[serde(default = "default_limb")]
    pub feet: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        HealthConfig {
            head: default_head(),
            body: default_body(),
            arms: default_limb(),
            legs: default_limb(),
            feet: default_limb(),
        }
    }
}

fn default_head() -> f64 {
    4.0
}

fn default_body() -> f64 {
    6.0
}

fn default_limb() -> f64 {
    4.0
}

impl HealthConfig {
    pub fn max_health(&self, part: PlayerPart) -> f64 {
        match part {
            PlayerPart::Head => self.head,
            PlayerPart::Body => self.body,
            PlayerPart::LeftArm | PlayerPart::RightArm => self.arms,
            PlayerPart::LeftLeg | PlayerPart::RightLeg => self.legs,
            PlayerPart::LeftFoot | PlayerPart::RightFoot => self.feet,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for part in PlayerPart::ALL {
            let max_health = self.max_health(part);
            if !(max_health > 0.0 && max_health.is_finite()) {
                return Err(ConfigError::ValidationError(format!(
                    "max health of {part} must be positive, got {max_health}"
                )));
            }
        }
        Ok(())
    }
}
