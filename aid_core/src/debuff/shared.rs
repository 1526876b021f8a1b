//! SharedDebuff - One debuff fed by several body parts
//!
//! Damage and healing on any of the tracked parts are collected during a
//! tick instead of reaching the wrapped debuff directly. Once per tick the
//! collected events are averaged and forwarded together with the mean
//! health fraction of the tracked parts.

use super::{Debuff, DebuffError, DebuffPolicy};
use crate::body::DamageModelLookup;
use crate::subject::Subject;
use crate::types::{DebuffSlot, PlayerPart};

/// A debuff shared by two or more parts
#[derive(Debug, Clone, PartialEq)]
pub struct SharedDebuff<P = Debuff> {
    debuff: P,
    parts: Box<[PlayerPart]>,
    damage: f64,
    damage_count: u32,
    healing: f64,
    healing_count: u32,
}

impl<P: DebuffPolicy> SharedDebuff<P> {
    /// Wrap `debuff` so it is fed by all of `parts`
    ///
    /// Fails for fewer than two parts; a single part should use the debuff
    /// directly.
    pub fn new(debuff: P, parts: &[PlayerPart]) -> Result<Self, DebuffError> {
        if parts.len() <= 1 {
            return Err(DebuffError::InvalidConfiguration { parts: parts.len() });
        }
        Ok(SharedDebuff {
            debuff,
            parts: parts.into(),
            damage: 0.0,
            damage_count: 0,
            healing: 0.0,
            healing_count: 0,
        })
    }

    /// Wrap `debuff` for every part of `slot`
    pub fn for_slot(debuff: P, slot: DebuffSlot) -> Result<Self, DebuffError> {
        Self::new(debuff, slot.parts())
    }

    /// Record damage taken by one of the tracked parts
    pub fn record_damage(&mut self, damage: f64) {
        self.damage += damage;
        self.damage_count += 1;
    }

    /// Record healing done on one of the tracked parts
    pub fn record_healing(&mut self, healing: f64) {
        self.healing += healing;
        self.healing_count += 1;
    }

    /// Forward this tick's events to the wrapped debuff
    ///
    /// Skipped, with nothing lost, while the subject is not simulated or
    /// has no damage model. Otherwise healing is forwarded before damage,
    /// `update` always runs last, and the pending events are cleared.
    /// Returns whether the wrapped debuff was reached.
    pub fn tick<L>(&mut self, subject: &mut Subject, lookup: &L) -> bool
    where
        L: DamageModelLookup + ?Sized,
    {
        if !subject.is_simulation_eligible() {
            return false;
        }
        let Some(body) = lookup.body_of(subject.id) else {
            return false;
        };

        let health_fraction = body.mean_health_fraction(&self.parts);

        if self.healing_count > 0 {
            let healing = self.healing / self.healing_count as f64;
            self.debuff.handle_healing(healing, health_fraction, subject);
        }
        if self.damage_count > 0 {
            let damage = self.damage / self.damage_count as f64;
            self.debuff.handle_damage(damage, health_fraction, subject);
        }
        self.debuff.update(subject, health_fraction);

        if self.damage_count > 0 || self.healing_count > 0 {
            tracing::trace!(
                subject = %subject.name,
                damage_events = self.damage_count,
                healing_events = self.healing_count,
                health_fraction,
                "flushed shared debuff"
            );
        }
        self.damage = 0.0;
        self.damage_count = 0;
        self.healing = 0.0;
        self.healing_count = 0;
        true
    }

    /// Pending damage total and event count
    pub fn pending_damage(&self) -> (f64, u32) {
        (self.damage, self.damage_count)
    }

    /// Pending healing total and event count
    pub fn pending_healing(&self) -> (f64, u32) {
        (self.healing, self.healing_count)
    }

    pub fn debuff(&self) -> &P {
        &self.debuff
    }
}
