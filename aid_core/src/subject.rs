//! Subject - The simulated player a damage model belongs to

use crate::item::ItemStack;
use crate::types::{Hand, Side, SubjectId};
use serde::{Deserialize, Serialize};

/// A status effect currently applied to a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Effect identifier (e.g., "slowness", "blindness")
    pub effect: String,
    /// Ticks until the effect wears off
    pub duration_ticks: u32,
    /// Effect strength, 0 is level I
    pub amplifier: u8,
}

impl ActiveEffect {
    pub fn new(effect: impl Into<String>, duration_ticks: u32, amplifier: u8) -> Self {
        ActiveEffect {
            effect: effect.into(),
            duration_ticks,
            amplifier,
        }
    }
}

/// Player state visible to the damage model, debuffs and healing items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub side: Side,
    /// False while the player is spawning, respawning or logging out
    pub active: bool,
    effects: Vec<ActiveEffect>,
    main_hand: Option<ItemStack>,
    off_hand: Option<ItemStack>,
    messages: Vec<String>,
}

impl Subject {
    /// Create an active subject on the given side
    pub fn new(id: SubjectId, name: impl Into<String>, side: Side) -> Self {
        Subject {
            id,
            name: name.into(),
            side,
            active: true,
            effects: Vec::new(),
            main_hand: None,
            off_hand: None,
            messages: Vec::new(),
        }
    }

    /// Create an active server-side subject
    pub fn server(id: SubjectId, name: impl Into<String>) -> Self {
        Self::new(id, name, Side::Server)
    }

    /// Whether this subject should be simulated this tick
    pub fn is_simulation_eligible(&self) -> bool {
        self.side == Side::Server && self.active
    }

    // === Effects ===

    /// Apply an effect, replacing any existing instance with the same id
    pub fn apply_effect(&mut self, effect: ActiveEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.effect == effect.effect) {
            *existing = effect;
        } else {
            self.effects.push(effect);
        }
    }

    /// Remove an effect, returning it if it was present
    pub fn remove_effect(&mut self, effect: &str) -> Option<ActiveEffect> {
        let index = self.effects.iter().position(|e| e.effect == effect)?;
        Some(self.effects.remove(index))
    }

    pub fn effect(&self, effect: &str) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.effect == effect)
    }

    pub fn has_effect(&self, effect: &str) -> bool {
        self.effect(effect).is_some()
    }

    pub fn effects(&self) -> &[ActiveEffect] {
        &self.effects
    }

    /// Count down effect durations and drop expired effects
    pub fn tick_effects(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.duration_ticks = effect.duration_ticks.saturating_sub(1);
        }
        self.effects.retain(|e| e.duration_ticks > 0);
    }

    // === Held items ===

    pub fn item_in_hand(&self, hand: Hand) -> Option<&ItemStack> {
        match hand {
            Hand::MainHand => self.main_hand.as_ref(),
            Hand::OffHand => self.off_hand.as_ref(),
        }
    }

    pub fn set_item_in_hand(&mut self, hand: Hand, stack: Option<ItemStack>) {
        let slot = self.hand_slot(hand);
        *slot = stack.filter(|s| s.count > 0);
    }

    /// Use up one item from the stack in the given hand
    pub fn consume_held_item(&mut self, hand: Hand) {
        let slot = self.hand_slot(hand);
        if let Some(stack) = slot.as_mut() {
            stack.count = stack.count.saturating_sub(1);
        }
        if slot.as_ref().is_some_and(|s| s.count == 0) {
            *slot = None;
        }
    }

    fn hand_slot(&mut self, hand: Hand) -> &mut Option<ItemStack> {
        match hand {
            Hand::MainHand => &mut self.main_hand,
            Hand::OffHand => &mut self.off_hand,
        }
    }

    // === Chat ===

    /// Deliver a system message to this player
    pub fn send_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
