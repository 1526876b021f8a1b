//! aid_core - Per-part health and debuffs for player entities
//!
//! This library provides:
//! - PlayerDamageModel: Health per body part, healing over time, death checks
//! - Debuffs: Status effects driven by part health, shared across multi-part slots
//! - DamageModelRegistry: Ownership and persistence of each player's model
//! - ApplyHealingItem: The client request to use a healing item on a part

pub mod body;
pub mod capability;
pub mod config;
pub mod damage_model;
pub mod debuff;
pub mod item;
pub mod network;
pub mod prelude;
pub mod subject;
pub mod types;

// Re-export core types for convenience
pub use body::{BodyError, BodyParts, DamageModelLookup, DamageablePart, PartHealer};
pub use capability::{CapabilityError, DamageModelRegistry, CAPABILITY_ID};
pub use config::{ConfigError, FirstAidConfig};
pub use damage_model::PlayerDamageModel;
pub use debuff::{Debuff, DebuffError, DebuffPolicy, SharedDebuff};
pub use item::{Item, ItemStack};
pub use network::{ApplyHealingItem, HealingOutcome, MessageError};
pub use subject::{ActiveEffect, Subject};
pub use types::{DebuffSlot, Hand, PlayerPart, Side, SubjectId};
