//! Debuff definitions

use super::ConfigError;
use crate::debuff::{ConstantThreshold, OnHitThreshold};
use crate::types::DebuffSlot;
use serde::{Deserialize, Serialize};

/// One debuff attached to a slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DebuffConfig {
    OnHit {
        slot: DebuffSlot,
        effect: String,
        thresholds: Vec<OnHitThreshold>,
    },
    Constant {
        slot: DebuffSlot,
        effect: String,
        thresholds: Vec<ConstantThreshold>,
        #[serde(default = "default_refresh_ticks")]
        refresh_ticks: u32,
    },
}

fn default_refresh_ticks() -> u32 {
    200
}

impl DebuffConfig {
    pub fn slot(&self) -> DebuffSlot {
        match self {
            DebuffConfig::OnHit { slot, .. } | DebuffConfig::Constant { slot, .. } => *slot,
        }
    }

    pub fn effect(&self) -> &str {
        match self {
            DebuffConfig::OnHit { effect, .. } | DebuffConfig::Constant { effect, .. } => effect,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let effect = self.effect();
        if effect.is_empty() {
            return Err(ConfigError::ValidationError(
                "debuff effect must not be empty".to_string(),
            ));
        }
        match self {
            DebuffConfig::OnHit { thresholds, .. } => {
                if thresholds.is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "{effect}: on_hit debuff needs at least one threshold"
                    )));
                }
                if let Some(t) = thresholds.iter().find(|t| !(t.damage > 0.0) || t.duration_ticks == 0) {
                    return Err(ConfigError::ValidationError(format!(
                        "{effect}: invalid threshold {} damage for {} ticks",
                        t.damage, t.duration_ticks
                    )));
                }
            }
            DebuffConfig::Constant {
                thresholds,
                refresh_ticks,
                ..
            } => {
                if thresholds.is_empty() {
                    return Err(ConfigError::ValidationError(format!(
                        "{effect}: constant debuff needs at least one threshold"
                    )));
                }
                if let Some(t) = thresholds
                    .iter()
                    .find(|t| !(t.health_fraction > 0.0 && t.health_fraction <= 1.0))
                {
                    return Err(ConfigError::ValidationError(format!(
                        "{effect}: health fraction {} outside (0, 1]",
                        t.health_fraction
                    )));
                }
                if *refresh_ticks == 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "{effect}: refresh_ticks must be at least 1"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn on_hit(slot: DebuffSlot, effect: &str, thresholds: &[(f64, u32)]) -> DebuffConfig {
    DebuffConfig::OnHit {
        slot,
        effect: effect.to_string(),
        thresholds: thresholds
            .iter()
            .map(|&(damage, duration_ticks)| OnHitThreshold { damage, duration_ticks })
            .collect(),
    }
}

fn constant(slot: DebuffSlot, effect: &str, thresholds: &[(f64, u8)]) -> DebuffConfig {
    DebuffConfig::Constant {
        slot,
        effect: effect.to_string(),
        thresholds: thresholds
            .iter()
            .map(|&(health_fraction, amplifier)| ConstantThreshold { health_fraction, amplifier })
            .collect(),
        refresh_ticks: default_refresh_ticks(),
    }
}

/// Stock debuffs
pub fn default_debuffs() -> Vec<DebuffConfig> {
    vec![
        on_hit(DebuffSlot::Head, "blindness", &[(2.0, 160), (1.0, 80)]),
        on_hit(DebuffSlot::Head, "nausea", &[(3.0, 320), (2.0, 240)]),
        on_hit(DebuffSlot::Body, "nausea", &[(4.0, 320), (2.0, 160)]),
        constant(DebuffSlot::Body, "weakness", &[(0.25, 1), (0.5, 0)]),
        constant(DebuffSlot::Arms, "mining_fatigue", &[(0.25, 2), (0.5, 1), (0.75, 0)]),
        constant(DebuffSlot::LegsAndFeet, "slowness", &[(0.35, 2), (0.6, 1), (0.8, 0)]),
    ]
}
