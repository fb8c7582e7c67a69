use std::borrow::Cow;

use livefeed_types::{QuickSlot, Snapshot};

use super::Reaction;
use crate::host::{Host, ItemClass, SaveGame, SaveGameLoad, resolve_item_class};
use crate::skills::SkillRules;

/// Rebuild the whole snapshot from save data.
///
/// With a load in progress the game's own finalization is replayed first and
/// its default handling suppressed. Without one, the save the running
/// session was loaded from is used.
pub fn reload<H: Host + ?Sized>(
    snapshot: &mut Snapshot,
    rules: &SkillRules,
    host: &mut H,
    load: Option<&SaveGameLoad>,
) -> Reaction {
    let (save, reaction) = match load {
        Some(load) => {
            host.finish_save_game_load(load);
            (Cow::Borrowed(&load.save_game), Reaction::took_over(true))
        }
        None => match host.last_loaded_save_game() {
            Some(save) => (Cow::Owned(save), Reaction::updated()),
            None => {
                tracing::debug!("No save game loaded, resetting snapshot");
                snapshot.reset();
                return Reaction::updated();
            }
        },
    };

    rebuild(snapshot, rules, host, &save);
    reaction
}

fn rebuild<H: Host + ?Sized>(snapshot: &mut Snapshot, rules: &SkillRules, host: &H, save: &SaveGame) {
    snapshot.reset();

    if let Some(stand_in) = host.primary_stand_in() {
        snapshot.head = stand_in.head;
        snapshot.skin = stand_in.skin;
    }

    snapshot.name = save.character_name.clone();
    snapshot.class = save.class_name.clone();
    snapshot.level = Some(save.exp_level);
    snapshot.op_level = Some(save.overpower_levels_unlocked);
    snapshot.playthrough = Some(save.playthroughs_completed);
    snapshot.current_playthrough = Some(save.last_playthrough_number);
    snapshot.current_op_level = Some(save.last_overpower_choice);

    snapshot.map = save
        .last_teleporter()
        .and_then(|station| host.fast_travel_level_name(station));

    for weapon in &save.weapons {
        if let Some(slot) = QuickSlot::new(weapon.quick_slot) {
            snapshot.set_weapon(slot, weapon.parts.display_name(None));
        }
    }

    for item in save.items.iter().filter(|item| item.equipped) {
        if let ItemClass::Gear(category) = resolve_item_class(&item.class_name) {
            snapshot.set_gear(category, item.parts.display_name(item.item_name.as_deref()));
        }
    }

    snapshot.skills = rules.normalize(snapshot.class.as_deref(), &save.skills);
}
