//! PlayerDamageModel - Per-part health plus the debuffs that react to it

use crate::body::{BodyParts, DamageablePart, PartHealer};
use crate::config::FirstAidConfig;
use crate::debuff::{DebuffError, SlotDebuffs};
use crate::subject::Subject;
use crate::types::PlayerPart;

/// Extended health state of one player
///
/// Only the body is persistent; debuff state is rebuilt from config.
#[derive(Debug, Clone)]
pub struct PlayerDamageModel {
    body: BodyParts,
    debuffs: SlotDebuffs,
}

impl PlayerDamageModel {
    /// Build a full-health model with the configured debuffs
    pub fn new(config: &FirstAidConfig) -> Result<Self, DebuffError> {
        Ok(PlayerDamageModel {
            body: BodyParts::new(&config.health),
            debuffs: SlotDebuffs::from_config(&config.debuffs)?,
        })
    }

    pub fn body(&self) -> &BodyParts {
        &self.body
    }

    pub fn part(&self, part: PlayerPart) -> &DamageablePart {
        self.body.part(part)
    }

    /// Replace the persistent body state, keeping debuffs
    pub fn restore_body(&mut self, body: BodyParts) {
        self.body = body;
    }

    /// Damage a part and notify the debuffs watching it
    ///
    /// Returns the damage actually taken.
    pub fn apply_damage(&mut self, part: PlayerPart, amount: f64, subject: &mut Subject) -> f64 {
        let state = self.body.part_mut(part);
        let taken = state.damage(amount, 0.0);
        if taken > 0.0 {
            let health_fraction = state.health_fraction();
            self.debuffs.on_damage(part, taken, health_fraction, subject);
        }
        taken
    }

    /// Heal a part and notify the debuffs watching it
    ///
    /// Returns the amount actually healed.
    pub fn heal(&mut self, part: PlayerPart, amount: f64, subject: &mut Subject) -> f64 {
        let state = self.body.part_mut(part);
        let healed = state.heal(amount);
        if healed > 0.0 {
            let health_fraction = state.health_fraction();
            self.debuffs.on_healing(part, healed, health_fraction, subject);
        }
        healed
    }

    /// Install a healer on a part, replacing any healer already there
    pub fn set_healer(&mut self, part: PlayerPart, healer: PartHealer) -> Option<PartHealer> {
        self.body.part_mut(part).active_healer.replace(healer)
    }

    /// Advance healers and debuffs by one tick
    pub fn tick(&mut self, subject: &mut Subject) {
        if !subject.is_simulation_eligible() {
            return;
        }

        for part in PlayerPart::ALL {
            let Some(healer) = self.body.part_mut(part).active_healer.as_mut() else {
                continue;
            };
            let heals = healer.tick();
            let amount = healer.heal_per_cycle;
            let finished = healer.is_finished();

            if heals {
                self.heal(part, amount, subject);
            }
            if finished {
                tracing::debug!(subject = %subject.name, %part, "healer used up");
                self.body.part_mut(part).active_healer = None;
            }
        }

        self.debuffs.tick(subject, &self.body);
    }

    /// Whether a vital part has no health left
    pub fn is_dead(&self) -> bool {
        self.body
            .iter()
            .any(|part| part.can_cause_death() && part.is_depleted())
    }

    pub fn current_health(&self) -> f64 {
        self.body.iter().map(|p| p.current_health).sum()
    }

    pub fn max_health(&self) -> f64 {
        self.body.iter().map(|p| p.max_health).sum()
    }
}
