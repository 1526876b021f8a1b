//! PartHealer - Healing over time installed on a body part by a healing item

use serde::{Deserialize, Serialize};

/// Heals a fixed amount every `ticks_per_heal` ticks, up to `max_heals` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartHealer {
    /// Health restored per heal
    pub heal_per_cycle: f64,
    /// Ticks between heals
    pub ticks_per_heal: u32,
    /// Total number of heals before the healer is used up
    pub max_heals: u32,
    ticks: u32,
    heals_done: u32,
}

impl PartHealer {
    pub fn new(heal_per_cycle: f64, ticks_per_heal: u32, max_heals: u32) -> Self {
        PartHealer {
            heal_per_cycle,
            ticks_per_heal: ticks_per_heal.max(1),
            max_heals,
            ticks: 0,
            heals_done: 0,
        }
    }

    /// Advance one tick
    ///
    /// Returns true if a heal of `heal_per_cycle` happens on this tick.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.ticks += 1;
        if self.ticks >= self.ticks_per_heal {
            self.ticks = 0;
            self.heals_done += 1;
            true
        } else {
            false
        }
    }

    pub fn heals_done(&self) -> u32 {
        self.heals_done
    }

    pub fn is_finished(&self) -> bool {
        self.heals_done >= self.max_heals
    }

    /// Total health this healer will still restore
    pub fn remaining_healing(&self) -> f64 {
        (self.max_heals - self.heals_done.min(self.max_heals)) as f64 * self.heal_per_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healer_cycle() {
        let mut healer = PartHealer::new(1.0, 3, 2);

        assert!(!healer.tick());
        assert!(!healer.tick());
        assert!(healer.tick());
        assert_eq!(healer.heals_done(), 1);
        assert!((healer.remaining_healing() - 1.0).abs() < f64::EPSILON);

        assert!(!healer.tick());
        assert!(!healer.tick());
        assert!(healer.tick());
        assert!(healer.is_finished());

        // Used up healers never heal again
        for _ in 0..10 {
            assert!(!healer.tick());
        }
    }

    #[test]
    fn test_zero_interval_heals_every_tick() {
        let mut healer = PartHealer::new(0.5, 0, 3);
        assert!(healer.tick());
        assert!(healer.tick());
        assert!(healer.tick());
        assert!(!healer.tick());
    }
}
