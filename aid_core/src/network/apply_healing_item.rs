//! ApplyHealingItem - A player applies the held healing item to a body part

use super::MessageError;
use crate::capability::DamageModelRegistry;
use crate::config::HealingConfig;
use crate::subject::Subject;
use crate::types::{Hand, PlayerPart, Side};

/// Request to apply the item in `hand` to `part`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyHealingItem {
    pub part: PlayerPart,
    pub hand: Hand,
}

/// What happened when the server handled the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealingOutcome {
    /// One item was used up and its healer installed on the part
    Applied,
    /// The subject has no damage model yet; nothing changed
    NoModel,
    /// The held item is not a healing item; the player was told
    InvalidItem,
}

impl ApplyHealingItem {
    /// Encoded size in bytes
    pub const SIZE: usize = 2;

    pub fn new(part: PlayerPart, hand: Hand) -> Self {
        ApplyHealingItem { part, hand }
    }

    /// Part ordinal, then 1 for the main hand or 0 for the off hand
    pub fn encode(&self) -> Vec<u8> {
        vec![self.part.ordinal() as u8, u8::from(self.hand == Hand::MainHand)]
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MessageError> {
        let &[part, hand, ..] = bytes else {
            return Err(MessageError::Truncated {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        };
        let part = PlayerPart::from_ordinal(part as usize).ok_or(MessageError::UnknownPart(part))?;
        let hand = if hand != 0 { Hand::MainHand } else { Hand::OffHand };
        Ok(ApplyHealingItem { part, hand })
    }

    /// Apply the message on the server
    pub fn handle(
        &self,
        subject: &mut Subject,
        registry: &mut DamageModelRegistry,
        healing: &HealingConfig,
    ) -> Result<HealingOutcome, MessageError> {
        if subject.side != Side::Server {
            return Err(MessageError::NotServer(subject.id));
        }
        let Some(model) = registry.get_mut(subject.id) else {
            return Ok(HealingOutcome::NoModel);
        };

        let stack = subject.item_in_hand(self.hand);
        let Some(healer) = stack.and_then(|s| s.item.create_healer(healing)) else {
            let item = stack.map_or_else(|| "nothing".to_string(), |s| s.item.to_string());
            tracing::warn!(
                subject = %subject.name,
                %item,
                "player has invalid item in hand while it should be a healing item"
            );
            subject.send_message("Unable to apply healing item!");
            return Ok(HealingOutcome::InvalidItem);
        };

        subject.consume_held_item(self.hand);
        model.set_healer(self.part, healer);
        tracing::debug!(subject = %subject.name, part = %self.part, "applied healing item");
        Ok(HealingOutcome::Applied)
    }
}
