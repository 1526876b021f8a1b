//! Core identifiers shared across the damage model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single damageable body part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerPart {
    Head,
    LeftArm,
    LeftLeg,
    LeftFoot,
    Body,
    RightArm,
    RightLeg,
    RightFoot,
}

impl PlayerPart {
    /// All parts in ordinal order
    pub const ALL: [PlayerPart; 8] = [
        PlayerPart::Head,
        PlayerPart::LeftArm,
        PlayerPart::LeftLeg,
        PlayerPart::LeftFoot,
        PlayerPart::Body,
        PlayerPart::RightArm,
        PlayerPart::RightLeg,
        PlayerPart::RightFoot,
    ];

    /// Stable index of this part, used for storage and the wire format
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a part by its ordinal
    pub fn from_ordinal(ordinal: usize) -> Option<PlayerPart> {
        Self::ALL.get(ordinal).copied()
    }

    /// The debuff slot this part belongs to
    pub fn slot(self) -> DebuffSlot {
        match self {
            PlayerPart::Head => DebuffSlot::Head,
            PlayerPart::Body => DebuffSlot::Body,
            PlayerPart::LeftArm | PlayerPart::RightArm => DebuffSlot::Arms,
            PlayerPart::LeftLeg
            | PlayerPart::RightLeg
            | PlayerPart::LeftFoot
            | PlayerPart::RightFoot => DebuffSlot::LegsAndFeet,
        }
    }

    /// Whether losing all health on this part kills the player
    pub fn can_cause_death(self) -> bool {
        matches!(self, PlayerPart::Head | PlayerPart::Body)
    }
}

impl fmt::Display for PlayerPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerPart::Head => "head",
            PlayerPart::LeftArm => "left arm",
            PlayerPart::LeftLeg => "left leg",
            PlayerPart::LeftFoot => "left foot",
            PlayerPart::Body => "body",
            PlayerPart::RightArm => "right arm",
            PlayerPart::RightLeg => "right leg",
            PlayerPart::RightFoot => "right foot",
        };
        f.write_str(name)
    }
}

/// A group of body parts sharing one set of debuffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffSlot {
    Head,
    Body,
    Arms,
    LegsAndFeet,
}

impl DebuffSlot {
    pub const ALL: [DebuffSlot; 4] = [
        DebuffSlot::Head,
        DebuffSlot::Body,
        DebuffSlot::Arms,
        DebuffSlot::LegsAndFeet,
    ];

    /// Parts covered by this slot
    pub fn parts(self) -> &'static [PlayerPart] {
        match self {
            DebuffSlot::Head => &[PlayerPart::Head],
            DebuffSlot::Body => &[PlayerPart::Body],
            DebuffSlot::Arms => &[PlayerPart::LeftArm, PlayerPart::RightArm],
            DebuffSlot::LegsAndFeet => &[
                PlayerPart::LeftLeg,
                PlayerPart::RightLeg,
                PlayerPart::LeftFoot,
                PlayerPart::RightFoot,
            ],
        }
    }

    /// Whether debuffs in this slot must be shared across parts
    pub fn is_shared(self) -> bool {
        self.parts().len() > 1
    }
}

/// Which hand an item is held in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    MainHand,
    OffHand,
}

/// Identity of a simulated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(pub u64);

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the game owns a subject instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Authoritative copy; the only side that simulates
    Server,
    /// Mirror of server state
    Client,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_part_in_exactly_one_slot() {
        for part in PlayerPart::ALL {
            let owners = DebuffSlot::ALL
                .iter()
                .filter(|slot| slot.parts().contains(&part))
                .count();
            assert_eq!(owners, 1, "{part} should belong to one slot");
            assert!(part.slot().parts().contains(&part));
        }
    }

    #[test]
    fn test_ordinal_round_trip() {
        for (i, part) in PlayerPart::ALL.iter().enumerate() {
            assert_eq!(part.ordinal(), i);
            assert_eq!(PlayerPart::from_ordinal(i), Some(*part));
        }
        assert_eq!(PlayerPart::from_ordinal(8), None);
    }

    #[test]
    fn test_shared_slots() {
        assert!(!DebuffSlot::Head.is_shared());
        assert!(!DebuffSlot::Body.is_shared());
        assert!(DebuffSlot::Arms.is_shared());
        assert!(DebuffSlot::LegsAndFeet.is_shared());
    }

    #[test]
    fn test_death_parts() {
        assert!(PlayerPart::Head.can_cause_death());
        assert!(PlayerPart::Body.can_cause_death());
        assert!(!PlayerPart::LeftFoot.can_cause_death());
    }
}
