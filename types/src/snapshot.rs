//! The exported session snapshot.
//!
//! Field order and names here are the document format consumed by overlays,
//! so they must stay stable.

use serde::{Deserialize, Serialize};

use crate::item::{EquipSlot, ItemCategory, QuickSlot};

/// Latest known state of the tracked character.
///
/// Every field starts out `None`; absence is a normal state and is written
/// out as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: Option<String>,
    pub class: Option<String>,
    pub head: Option<String>,
    pub skin: Option<String>,
    pub level: Option<i32>,
    #[serde(rename = "OPLevel")]
    pub op_level: Option<i32>,
    pub playthrough: Option<i32>,
    #[serde(rename = "currentPlaythrough")]
    pub current_playthrough: Option<i32>,
    #[serde(rename = "currentOPLevel")]
    pub current_op_level: Option<i32>,
    pub map: Option<String>,
    /// Indexed by quick slot minus one.
    pub weapons: [Option<String>; QuickSlot::COUNT],
    pub shield: Option<String>,
    pub grenade: Option<String>,
    #[serde(rename = "classMod")]
    pub class_mod: Option<String>,
    pub relic: Option<String>,
    pub skills: Option<Vec<i32>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything and start from an empty snapshot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn weapon(&self, slot: QuickSlot) -> Option<&str> {
        self.weapons[slot.index()].as_deref()
    }

    pub fn set_weapon(&mut self, slot: QuickSlot, name: Option<String>) {
        self.weapons[slot.index()] = name;
    }

    /// Exchange the recorded names of two quick slots.
    pub fn swap_weapons(&mut self, a: QuickSlot, b: QuickSlot) {
        self.weapons.swap(a.index(), b.index());
    }

    pub fn gear(&self, category: ItemCategory) -> Option<&str> {
        match category {
            ItemCategory::Shield => self.shield.as_deref(),
            ItemCategory::Grenade => self.grenade.as_deref(),
            ItemCategory::ClassMod => self.class_mod.as_deref(),
            ItemCategory::Relic => self.relic.as_deref(),
        }
    }

    pub fn set_gear(&mut self, category: ItemCategory, name: Option<String>) {
        let field = match category {
            ItemCategory::Shield => &mut self.shield,
            ItemCategory::Grenade => &mut self.grenade,
            ItemCategory::ClassMod => &mut self.class_mod,
            ItemCategory::Relic => &mut self.relic,
        };
        *field = name;
    }

    pub fn set_slot(&mut self, slot: EquipSlot, name: Option<String>) {
        match slot {
            EquipSlot::Weapon(quick_slot) => self.set_weapon(quick_slot, name),
            EquipSlot::Gear(category) => self.set_gear(category, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_serializes_every_field_as_null() {
        let json = serde_json::to_value(Snapshot::new()).unwrap();
        let object = json.as_object().unwrap();

        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 16);
        assert!(object["OPLevel"].is_null());
        assert!(object["classMod"].is_null());
        assert!(object["skills"].is_null());
        assert_eq!(object["weapons"].as_array().unwrap().len(), 4);
        assert!(object["weapons"][3].is_null());
    }

    #[test]
    fn swap_weapons_exchanges_recorded_names() {
        let mut snapshot = Snapshot::new();
        let first = QuickSlot::new(1).unwrap();
        let third = QuickSlot::new(3).unwrap();
        snapshot.set_weapon(first, Some("Hard Hammer".to_string()));

        snapshot.swap_weapons(first, third);

        assert_eq!(snapshot.weapon(first), None);
        assert_eq!(snapshot.weapon(third), Some("Hard Hammer"));
        assert_eq!(snapshot.weapons.len(), 4);
    }

    #[test]
    fn gear_slots_map_to_their_own_fields() {
        let mut snapshot = Snapshot::new();
        snapshot.set_slot(EquipSlot::Gear(ItemCategory::ClassMod), Some("Legendary Siren".into()));

        assert_eq!(snapshot.class_mod.as_deref(), Some("Legendary Siren"));
        assert_eq!(snapshot.gear(ItemCategory::Relic), None);
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut snapshot = Snapshot::new();
        snapshot.name = Some("Axton".into());
        snapshot.skills = Some(vec![1, 2]);

        snapshot.reset();

        assert_eq!(snapshot, Snapshot::default());
    }
}
