//! SlotDebuffs - The debuffs of every slot of one player

use super::{Debuff, DebuffError, DebuffPolicy, SharedDebuff};
use crate::body::BodyParts;
use crate::config::DebuffConfig;
use crate::subject::Subject;
use crate::types::{DebuffSlot, PlayerPart};

/// A debuff as installed in a slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotDebuff {
    /// Slot with one part; events reach the debuff immediately
    Direct(Debuff),
    /// Slot with several parts; events are batched per tick
    Shared(SharedDebuff<Debuff>),
}

impl SlotDebuff {
    /// Install `debuff` in `slot`, sharing it if the slot has several parts
    pub fn install(debuff: Debuff, slot: DebuffSlot) -> Result<Self, DebuffError> {
        if slot.is_shared() {
            Ok(SlotDebuff::Shared(SharedDebuff::for_slot(debuff, slot)?))
        } else {
            Ok(SlotDebuff::Direct(debuff))
        }
    }
}

/// Debuffs grouped by slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotDebuffs {
    slots: [Vec<SlotDebuff>; 4],
}

impl SlotDebuffs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the debuffs described by a list of config entries
    pub fn from_config(configs: &[DebuffConfig]) -> Result<Self, DebuffError> {
        let mut debuffs = Self::new();
        for config in configs {
            debuffs.add(config.slot(), Debuff::from_config(config))?;
        }
        Ok(debuffs)
    }

    pub fn add(&mut self, slot: DebuffSlot, debuff: Debuff) -> Result<(), DebuffError> {
        self.slots[slot as usize].push(SlotDebuff::install(debuff, slot)?);
        Ok(())
    }

    pub fn slot(&self, slot: DebuffSlot) -> &[SlotDebuff] {
        &self.slots[slot as usize]
    }

    /// Notify the debuffs watching `part` that it took damage
    pub fn on_damage(&mut self, part: PlayerPart, damage: f64, health_fraction: f64, subject: &mut Subject) {
        for entry in self.slots[part.slot() as usize].iter_mut() {
            match entry {
                SlotDebuff::Direct(debuff) => debuff.handle_damage(damage, health_fraction, subject),
                SlotDebuff::Shared(shared) => shared.record_damage(damage),
            }
        }
    }

    /// Notify the debuffs watching `part` that it was healed
    pub fn on_healing(&mut self, part: PlayerPart, healing: f64, health_fraction: f64, subject: &mut Subject) {
        for entry in self.slots[part.slot() as usize].iter_mut() {
            match entry {
                SlotDebuff::Direct(debuff) => debuff.handle_healing(healing, health_fraction, subject),
                SlotDebuff::Shared(shared) => shared.record_healing(healing),
            }
        }
    }

    /// Per-tick update of every debuff against the current body state
    pub fn tick(&mut self, subject: &mut Subject, body: &BodyParts) {
        for slot in DebuffSlot::ALL {
            let health_fraction = body.mean_health_fraction(slot.parts());
            for entry in self.slots[slot as usize].iter_mut() {
                match entry {
                    SlotDebuff::Direct(debuff) => debuff.update(subject, health_fraction),
                    SlotDebuff::Shared(shared) => {
                        shared.tick(subject, body);
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
