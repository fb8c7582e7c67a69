use serde::{Deserialize, Serialize};

/// Non-weapon equipment categories tracked in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Shield,
    Grenade,
    ClassMod,
    Relic,
}

/// One of the four weapon quick slots, numbered 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuickSlot(u8);

impl QuickSlot {
    pub const COUNT: usize = 4;

    /// Resolve a raw host slot number. The host reports 0 for weapons that
    /// are carried but not assigned to a quick slot.
    pub fn new(number: i32) -> Option<Self> {
        match number {
            1..=4 => Some(Self(number as u8)),
            _ => None,
        }
    }

    /// Position of this slot in `Snapshot::weapons`.
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

/// A single place in the snapshot that an equip or unequip can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    Weapon(QuickSlot),
    Gear(ItemCategory),
}
