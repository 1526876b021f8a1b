//! Items a player can hold, and the healing items among them

use crate::body::PartHealer;
use crate::config::HealingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Bandage,
    Plaster,
    /// Any non-healing item, by registry name
    Other(String),
}

impl Item {
    /// Whether this item can be applied to a body part
    pub fn is_healing_item(&self) -> bool {
        matches!(self, Item::Bandage | Item::Plaster)
    }

    /// Create the healer this item installs on a body part
    ///
    /// Returns `None` for items that are not healing items.
    pub fn create_healer(&self, config: &HealingConfig) -> Option<PartHealer> {
        let healer = match self {
            Item::Bandage => &config.bandage,
            Item::Plaster => &config.plaster,
            Item::Other(_) => return None,
        };
        Some(PartHealer::new(
            healer.heal_per_cycle,
            healer.ticks_per_heal,
            healer.max_heals,
        ))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Bandage => f.write_str("first_aid:bandage"),
            Item::Plaster => f.write_str("first_aid:plaster"),
            Item::Other(name) => f.write_str(name),
        }
    }
}

/// A stack of identical items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item: Item, count: u32) -> Self {
        ItemStack { item, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healing_items_create_healers() {
        let config = HealingConfig::default();

        let bandage = Item::Bandage.create_healer(&config).unwrap();
        assert_eq!(bandage.max_heals, config.bandage.max_heals);
        assert_eq!(bandage.ticks_per_heal, config.bandage.ticks_per_heal);

        let plaster = Item::Plaster.create_healer(&config).unwrap();
        assert_eq!(plaster.max_heals, config.plaster.max_heals);
    }

    #[test]
    fn test_other_items_do_not_heal() {
        let item = Item::Other("minecraft:stick".to_string());
        assert!(!item.is_healing_item());
        assert!(item.create_healer(&HealingConfig::default()).is_none());
        assert_eq!(item.to_string(), "minecraft:stick");
    }
}
