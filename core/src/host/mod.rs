//! Host boundary.
//!
//! The game is only ever observed through this module: plain data captured
//! from host objects when a notification fires, plus the [`Host`] trait for
//! the handful of live queries and default operations the handlers need.

mod item_class;

use livefeed_types::format_inventory_name;
use serde::{Deserialize, Serialize};

use crate::events::SubscriptionRegistry;

pub use item_class::{ItemClass, resolve_item_class};

/// Live access to the running game.
///
/// Implemented by the in-game adapter. Every method is called synchronously
/// from inside a handler; none of them may re-enter the engine.
pub trait Host: SubscriptionRegistry {
    /// Run the game's own save-game finalization with the captured arguments.
    fn finish_save_game_load(&mut self, load: &SaveGameLoad);

    /// Run the game's own inventory-readying for `item`.
    fn ready_inventory(&mut self, item: &InventoryItem);

    /// The save game most recently loaded by the local player, if any.
    fn last_loaded_save_game(&self) -> Option<SaveGame>;

    /// Desired customizations of the primary player's front-end stand-in.
    fn primary_stand_in(&self) -> Option<Customization>;

    /// Level name of a fast-travel station, from the global station lookup.
    fn fast_travel_level_name(&self, station: &str) -> Option<String>;

    fn world(&self) -> WorldState;
}

/// A single skill entry as the game orders it for the active class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGrade {
    #[serde(default)]
    pub skill: String,
    pub grade: i32,
}

/// Head and skin selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customization {
    pub head: Option<String>,
    pub skin: Option<String>,
}

/// Session-wide state from the current world's replication info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldState {
    pub map_name: Option<String>,
    pub current_playthrough: i32,
    pub overpower_level_modifier: i32,
}

/// Prefix and title name parts of an inventory definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameParts {
    pub prefix: Option<String>,
    pub title: Option<String>,
}

impl NameParts {
    pub fn display_name(&self, fallback: Option<&str>) -> Option<String> {
        format_inventory_name(self.prefix.as_deref(), self.title.as_deref(), fallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedWeapon {
    pub quick_slot: i32,
    pub parts: NameParts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedItem {
    pub equipped: bool,
    /// Class of the item definition, e.g. `ShieldDefinition`.
    pub class_name: String,
    /// Base item name, used when no name parts are set.
    pub item_name: Option<String>,
    pub parts: NameParts,
}

/// Per-playthrough mission progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionPlaythrough {
    pub last_visited_teleporter: Option<String>,
}

/// The subset of a save game the snapshot is rebuilt from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveGame {
    pub character_name: Option<String>,
    pub class_name: Option<String>,
    pub exp_level: i32,
    pub overpower_levels_unlocked: i32,
    pub playthroughs_completed: i32,
    pub last_playthrough_number: i32,
    pub last_overpower_choice: i32,
    pub last_visited_teleporter: Option<String>,
    pub mission_playthroughs: Vec<MissionPlaythrough>,
    pub weapons: Vec<SavedWeapon>,
    pub items: Vec<SavedItem>,
    pub skills: Vec<SkillGrade>,
}

impl SaveGame {
    /// Fast-travel station the character was last at.
    ///
    /// Falls back to the station recorded for the current playthrough when
    /// no global one is set.
    pub fn last_teleporter(&self) -> Option<&str> {
        non_empty(self.last_visited_teleporter.as_deref()).or_else(|| {
            let index = usize::try_from(self.last_playthrough_number).ok()?;
            let playthrough = self.mission_playthroughs.get(index)?;
            non_empty(playthrough.last_visited_teleporter.as_deref())
        })
    }
}

/// Arguments the game passed to its save-game finalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadParams {
    pub load_result: i32,
    pub update_pri: bool,
    pub loaded_new_save_game: bool,
    pub load_player: bool,
    pub refresh_stand_in: bool,
    pub load_player_behavior: i32,
}

/// A save-game load intercepted before the game finished it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGameLoad {
    pub save_game: SaveGame,
    #[serde(default)]
    pub params: LoadParams,
}

/// An inventory item as seen by the inventory manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    /// Runtime class of the item, e.g. `WillowWeapon` or `WillowShield`.
    pub class_name: String,
    /// 1-4 for slotted weapons, 0 otherwise.
    pub quick_slot: i32,
    /// The game's short human-readable name for the item.
    pub display_name: Option<String>,
}

/// The traveling pawn and its controller, captured on teleport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawnState {
    pub preferred_name: Option<String>,
    pub class_name: Option<String>,
    pub customization: Customization,
    pub exp_level: i32,
    pub overpower_levels_unlocked: i32,
    pub highest_completed_playthrough: i32,
    pub skills: Vec<SkillGrade>,
}

/// The owning player of a menu that just closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuOwner {
    pub preferred_name: Option<String>,
    pub customization: Customization,
    pub skills: Vec<SkillGrade>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
