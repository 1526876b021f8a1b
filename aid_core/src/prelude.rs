//! Prelude module for convenient imports
//!
//! ```rust
//! use aid_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DebuffSlot, Hand, PlayerPart, Side, SubjectId};
pub use crate::subject::{ActiveEffect, Subject};

// Health
pub use crate::body::{BodyError, BodyParts, DamageModelLookup, DamageablePart, PartHealer};
pub use crate::damage_model::PlayerDamageModel;
pub use crate::capability::DamageModelRegistry;

// Debuffs
pub use crate::debuff::{Debuff, DebuffPolicy, SharedDebuff, SlotDebuffs};

// Items and messages
pub use crate::item::{Item, ItemStack};
pub use crate::network::{ApplyHealingItem, HealingOutcome};

// Config
pub use crate::config::FirstAidConfig;
