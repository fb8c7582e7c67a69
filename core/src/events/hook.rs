//! Subscription contract with the host's hook registry.

use serde::{Deserialize, Serialize};

const HANDLER_PREFIX: &str = "LiveFeed";

/// Host functions the engine hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SaveGameLoaded,
    SkillGradeChanged,
    OverpowerIncremented,
    ExpLevelChanged,
    PlaythroughCompleted,
    Teleported,
    CustomizationClosed,
    CharacterSelectionClosed,
    InventoryReadied,
    InventoryRemoved,
    QuickSlotSwitched,
    Tick,
}

impl EventKind {
    /// Everything registered while the feed is active. `Tick` is missing on
    /// purpose: it is only subscribed while an equip is waiting to settle.
    pub const PERSISTENT: [EventKind; 11] = [
        EventKind::SaveGameLoaded,
        EventKind::SkillGradeChanged,
        EventKind::OverpowerIncremented,
        EventKind::ExpLevelChanged,
        EventKind::PlaythroughCompleted,
        EventKind::Teleported,
        EventKind::CustomizationClosed,
        EventKind::CharacterSelectionClosed,
        EventKind::InventoryReadied,
        EventKind::InventoryRemoved,
        EventKind::QuickSlotSwitched,
    ];

    /// Fully qualified path of the hooked host function.
    pub fn hook_path(self) -> &'static str {
        match self {
            EventKind::SaveGameLoaded => "WillowGame.WillowPlayerController.FinishSaveGameLoad",
            EventKind::SkillGradeChanged => "WillowGame.WillowPlayerController.ClientSetSkillGrade",
            EventKind::OverpowerIncremented => {
                "WillowGame.WillowPlayerController.ClientIncrementOverpowerLevel"
            }
            EventKind::ExpLevelChanged => "WillowGame.WillowPlayerController.ClientOnExpLevelChange",
            EventKind::PlaythroughCompleted => {
                "WillowGame.WillowPlayerController.OnPlaythroughCompleted"
            }
            EventKind::Teleported => "WillowGame.WillowPlayerPawn.NotifyTeleported",
            EventKind::CustomizationClosed => "WillowGame.CustomizationGFxMovie.OnClose",
            EventKind::CharacterSelectionClosed => {
                "WillowGame.CharacterSelectionReduxGFxMovie.OnClose"
            }
            EventKind::InventoryReadied => "WillowGame.WillowInventoryManager.InventoryReadied",
            EventKind::InventoryRemoved => "WillowGame.WillowInventoryManager.RemoveFromInventory",
            EventKind::QuickSlotSwitched => "WillowGame.WillowInventoryManager.SwitchQuickSlot",
            EventKind::Tick => "WillowGame.WillowGameViewportClient.Tick",
        }
    }

    /// Identifier this engine registers its handler under.
    pub fn handler_id(self) -> String {
        format!("{HANDLER_PREFIX}.{}", self.hook_path())
    }
}

/// What the host should do with its own handling after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookResult {
    /// Let the host's default handling proceed.
    #[default]
    Handled,
    /// The handler already did the host's work; skip the default.
    SuppressDefault,
}

impl HookResult {
    /// Boolean form used by hook registries: `true` means propagate.
    pub fn propagates(self) -> bool {
        matches!(self, HookResult::Handled)
    }
}

/// The host's hook registry.
pub trait SubscriptionRegistry {
    fn register(&mut self, event: EventKind, handler_id: &str);
    fn unregister(&mut self, event: EventKind, handler_id: &str);
}
