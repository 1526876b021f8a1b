//! Debuffs - Status effects driven by body part health

mod constant;
mod on_hit;
mod shared;
mod slots;

pub use constant::{ConstantDebuff, ConstantThreshold};
pub use on_hit::{OnHitDebuff, OnHitThreshold};
pub use shared::SharedDebuff;
pub use slots::{SlotDebuff, SlotDebuffs};

use crate::config::DebuffConfig;
use crate::subject::Subject;
use thiserror::Error;

/// Debuff construction error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DebuffError {
    #[error("a shared debuff needs at least 2 parts, got {parts}")]
    InvalidConfiguration { parts: usize },
}

/// Reaction of a debuff to health changes on the parts it watches
///
/// `health_fraction` is always the fraction of the watched part (or the
/// mean over the watched parts for shared debuffs) after the change.
pub trait DebuffPolicy {
    /// Called when a watched part took `damage`
    fn handle_damage(&mut self, damage: f64, health_fraction: f64, subject: &mut Subject);

    /// Called when a watched part was healed by `healing`
    fn handle_healing(&mut self, healing: f64, health_fraction: f64, subject: &mut Subject);

    /// Called once per tick
    fn update(&mut self, subject: &mut Subject, health_fraction: f64);
}

/// Concrete debuff effects
#[derive(Debug, Clone, PartialEq)]
pub enum Debuff {
    /// Applies an effect when a single hit is strong enough
    OnHit(OnHitDebuff),
    /// Keeps an effect active while health is low
    Constant(ConstantDebuff),
}

impl Debuff {
    /// Build a debuff from its configuration entry
    pub fn from_config(config: &DebuffConfig) -> Self {
        match config {
            DebuffConfig::OnHit {
                effect, thresholds, ..
            } => Debuff::OnHit(OnHitDebuff::new(effect.clone(), thresholds.clone())),
            DebuffConfig::Constant {
                effect,
                thresholds,
                refresh_ticks,
                ..
            } => Debuff::Constant(ConstantDebuff::new(
                effect.clone(),
                thresholds.clone(),
                *refresh_ticks,
            )),
        }
    }

    /// Id of the effect this debuff applies
    pub fn effect(&self) -> &str {
        match self {
            Debuff::OnHit(d) => &d.effect,
            Debuff::Constant(d) => &d.effect,
        }
    }
}

impl DebuffPolicy for Debuff {
    fn handle_damage(&mut self, damage: f64, health_fraction: f64, subject: &mut Subject) {
        match self {
            Debuff::OnHit(d) => d.handle_damage(damage, health_fraction, subject),
            Debuff::Constant(d) => d.handle_damage(damage, health_fraction, subject),
        }
    }

    fn handle_healing(&mut self, healing: f64, health_fraction: f64, subject: &mut Subject) {
        match self {
            Debuff::OnHit(d) => d.handle_healing(healing, health_fraction, subject),
            Debuff::Constant(d) => d.handle_healing(healing, health_fraction, subject),
        }
    }

    fn update(&mut self, subject: &mut Subject, health_fraction: f64) {
        match self {
            Debuff::OnHit(d) => d.update(subject, health_fraction),
            Debuff::Constant(d) => d.update(subject, health_fraction),
        }
    }
}
