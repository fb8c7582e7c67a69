use livefeed_types::{EquipSlot, ItemCategory, QuickSlot};

use super::InventoryItem;

const WEAPON_CLASS: &str = "WillowWeapon";

/// Definition and runtime class names for each tracked gear category.
static GEAR_CLASSES: phf::Map<&'static str, ItemCategory> = phf::phf_map! {
    "ShieldDefinition" => ItemCategory::Shield,
    "WillowShield" => ItemCategory::Shield,
    "GrenadeModDefinition" => ItemCategory::Grenade,
    "WillowGrenadeMod" => ItemCategory::Grenade,
    "ClassModDefinition" => ItemCategory::ClassMod,
    "CrossDLCClassModDefinition" => ItemCategory::ClassMod,
    "WillowClassMod" => ItemCategory::ClassMod,
    "ArtifactDefinition" => ItemCategory::Relic,
    "WillowArtifact" => ItemCategory::Relic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    Weapon,
    Gear(ItemCategory),
    Untracked,
}

pub fn resolve_item_class(class_name: &str) -> ItemClass {
    if class_name == WEAPON_CLASS {
        return ItemClass::Weapon;
    }
    GEAR_CLASSES
        .get(class_name)
        .copied()
        .map_or(ItemClass::Untracked, ItemClass::Gear)
}

impl InventoryItem {
    pub fn item_class(&self) -> ItemClass {
        resolve_item_class(&self.class_name)
    }

    /// Snapshot slot this item occupies, if it is tracked at all.
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self.item_class() {
            ItemClass::Weapon => QuickSlot::new(self.quick_slot).map(EquipSlot::Weapon),
            ItemClass::Gear(category) => Some(EquipSlot::Gear(category)),
            ItemClass::Untracked => None,
        }
    }
}
