use serde::{Deserialize, Serialize};

use super::EventKind;
use crate::host::{InventoryItem, MenuOwner, PawnState, SaveGameLoad, SkillGrade};

/// Which object raised a notification.
///
/// Inventory notifications fire for every inventory manager in the world;
/// only the local player's are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    LocalPlayer,
    Other,
}

impl Source {
    pub fn is_local_player(self) -> bool {
        matches!(self, Source::LocalPlayer)
    }
}

/// The two menus whose closing refreshes name, skills and appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuFlow {
    Customization,
    CharacterSelection,
}

/// A host notification with the data captured from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    /// `load` is `None` when the reload should be derived from the session
    /// that is already running instead of from a load in progress.
    SaveGameLoaded {
        #[serde(default)]
        load: Option<SaveGameLoad>,
    },
    SkillGradeChanged {
        skills: Vec<SkillGrade>,
    },
    ExpLevelChanged {
        level: i32,
    },
    OverpowerIncremented {
        levels_unlocked: i32,
        increment: i32,
        maximum: i32,
    },
    PlaythroughCompleted {
        number: i32,
    },
    Teleported {
        pawn: PawnState,
    },
    MenuClosed {
        flow: MenuFlow,
        owner: MenuOwner,
    },
    InventoryReadied {
        item: InventoryItem,
    },
    InventoryRemoved {
        item: InventoryItem,
    },
    QuickSlotSwitched {
        item: InventoryItem,
        new_slot: i32,
    },
    Tick,
}

impl Notification {
    /// Reload from whatever session is currently running.
    pub fn reload_current() -> Self {
        Notification::SaveGameLoaded { load: None }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Notification::SaveGameLoaded { .. } => EventKind::SaveGameLoaded,
            Notification::SkillGradeChanged { .. } => EventKind::SkillGradeChanged,
            Notification::ExpLevelChanged { .. } => EventKind::ExpLevelChanged,
            Notification::OverpowerIncremented { .. } => EventKind::OverpowerIncremented,
            Notification::PlaythroughCompleted { .. } => EventKind::PlaythroughCompleted,
            Notification::Teleported { .. } => EventKind::Teleported,
            Notification::MenuClosed {
                flow: MenuFlow::Customization,
                ..
            } => EventKind::CustomizationClosed,
            Notification::MenuClosed {
                flow: MenuFlow::CharacterSelection,
                ..
            } => EventKind::CharacterSelectionClosed,
            Notification::InventoryReadied { .. } => EventKind::InventoryReadied,
            Notification::InventoryRemoved { .. } => EventKind::InventoryRemoved,
            Notification::QuickSlotSwitched { .. } => EventKind::QuickSlotSwitched,
            Notification::Tick => EventKind::Tick,
        }
    }
}
