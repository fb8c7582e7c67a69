use livefeed_types::Snapshot;

use super::Reaction;
use crate::host::{Host, MenuOwner, PawnState};
use crate::skills::SkillRules;

/// Refresh identity, progression, location and skills after the local
/// pawn travels.
pub fn teleported<H: Host + ?Sized>(
    snapshot: &mut Snapshot,
    rules: &SkillRules,
    host: &H,
    pawn: &PawnState,
) -> Reaction {
    snapshot.name = pawn.preferred_name.clone();

    if let Some(class) = &pawn.class_name {
        snapshot.class = Some(class.clone());
    }
    if let Some(head) = &pawn.customization.head {
        snapshot.head = Some(head.clone());
    }
    if let Some(skin) = &pawn.customization.skin {
        snapshot.skin = Some(skin.clone());
    }

    snapshot.level = Some(pawn.exp_level);
    snapshot.op_level = Some(pawn.overpower_levels_unlocked);
    snapshot.playthrough = Some(pawn.highest_completed_playthrough);

    let world = host.world();
    snapshot.current_playthrough = Some(world.current_playthrough);
    snapshot.current_op_level = Some(world.overpower_level_modifier);
    snapshot.map = world.map_name;

    snapshot.skills = rules.normalize(snapshot.class.as_deref(), &pawn.skills);
    Reaction::updated()
}

/// Refresh name, skills, appearance and map when a customization or
/// character selection menu closes.
pub fn menu_closed<H: Host + ?Sized>(
    snapshot: &mut Snapshot,
    rules: &SkillRules,
    host: &H,
    owner: &MenuOwner,
) -> Reaction {
    snapshot.name = owner.preferred_name.clone();
    snapshot.skills = rules.normalize(snapshot.class.as_deref(), &owner.skills);
    snapshot.head = owner.customization.head.clone();
    snapshot.skin = owner.customization.skin.clone();
    snapshot.map = host.world().map_name;
    Reaction::updated()
}
