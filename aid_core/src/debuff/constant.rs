//! ConstantDebuff - Effect held active while health stays low

use super::DebuffPolicy;
use crate::subject::{ActiveEffect, Subject};
use serde::{Deserialize, Serialize};

/// Applies `amplifier` while the health fraction is below `health_fraction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantThreshold {
    pub health_fraction: f64,
    pub amplifier: u8,
}

/// Keeps an effect on the subject whose strength follows health
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDebuff {
    pub effect: String,
    /// Sorted by health fraction, lowest first
    thresholds: Vec<ConstantThreshold>,
    refresh_ticks: u32,
    ticks_since_apply: u32,
    active_amplifier: Option<u8>,
}

impl ConstantDebuff {
    pub fn new(effect: String, mut thresholds: Vec<ConstantThreshold>, refresh_ticks: u32) -> Self {
        thresholds.sort_by(|a, b| a.health_fraction.total_cmp(&b.health_fraction));
        ConstantDebuff {
            effect,
            thresholds,
            refresh_ticks: refresh_ticks.max(1),
            ticks_since_apply: 0,
            active_amplifier: None,
        }
    }

    /// Amplifier for the given health fraction, `None` when healthy enough
    pub fn amplifier_for(&self, health_fraction: f64) -> Option<u8> {
        self.thresholds
            .iter()
            .find(|t| health_fraction < t.health_fraction)
            .map(|t| t.amplifier)
    }

    pub fn active_amplifier(&self) -> Option<u8> {
        self.active_amplifier
    }

    fn sync(&mut self, subject: &mut Subject, health_fraction: f64) {
        match self.amplifier_for(health_fraction) {
            None => {
                if self.active_amplifier.take().is_some() {
                    subject.remove_effect(&self.effect);
                }
            }
            Some(amplifier) => {
                let changed = self.active_amplifier != Some(amplifier);
                if changed || self.ticks_since_apply >= self.refresh_ticks {
                    // Outlives the refresh interval so the effect never flickers
                    let duration = self.refresh_ticks + 10;
                    subject.apply_effect(ActiveEffect::new(self.effect.clone(), duration, amplifier));
                    self.ticks_since_apply = 0;
                    self.active_amplifier = Some(amplifier);
                }
            }
        }
    }
}

impl DebuffPolicy for ConstantDebuff {
    fn handle_damage(&mut self, _damage: f64, health_fraction: f64, subject: &mut Subject) {
        self.sync(subject, health_fraction);
    }

    fn handle_healing(&mut self, _healing: f64, health_fraction: f64, subject: &mut Subject) {
        self.sync(subject, health_fraction);
    }

    fn update(&mut self, subject: &mut Subject, health_fraction: f64) {
        self.ticks_since_apply = self.ticks_since_apply.saturating_add(1);
        self.sync(subject, health_fraction);
    }
}
