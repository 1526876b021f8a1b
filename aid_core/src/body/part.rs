//! DamageablePart - Health state of one body part

use super::PartHealer;
use crate::types::PlayerPart;
use serde::{Deserialize, Serialize};

/// Health of a single body part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageablePart {
    pub part: PlayerPart,
    pub current_health: f64,
    /// Always strictly positive
    pub max_health: f64,
    /// Healing item currently working on this part
    #[serde(default)]
    pub active_healer: Option<PartHealer>,
}

impl DamageablePart {
    /// Create a part at full health
    pub fn new(part: PlayerPart, max_health: f64) -> Self {
        DamageablePart {
            part,
            current_health: max_health,
            max_health,
            active_healer: None,
        }
    }

    pub fn can_cause_death(&self) -> bool {
        self.part.can_cause_death()
    }

    /// Current health as a fraction of max health, in [0, 1]
    pub fn health_fraction(&self) -> f64 {
        self.current_health / self.max_health
    }

    /// Take damage without dropping below `minimum`
    ///
    /// Returns the damage actually taken.
    pub fn damage(&mut self, amount: f64, minimum: f64) -> f64 {
        if !(amount > 0.0) {
            return 0.0;
        }
        let new_health = (self.current_health - amount).max(minimum.min(self.current_health));
        let taken = self.current_health - new_health;
        self.current_health = new_health;
        taken
    }

    /// Restore health up to max health
    ///
    /// Returns the amount actually healed.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if !(amount > 0.0) {
            return 0.0;
        }
        let new_health = (self.current_health + amount).min(self.max_health);
        let healed = new_health - self.current_health;
        self.current_health = new_health;
        healed
    }

    pub fn is_depleted(&self) -> bool {
        self.current_health <= 0.0
    }
}
