//! One handler per host notification.
//!
//! Handlers mutate the snapshot in place and report back whether anything
//! changed and what the host should do with its own default handling.
//! Persisting is left to the engine.

pub mod inventory;
pub mod presence;
pub mod progression;
pub mod reload;

use crate::events::HookResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub result: HookResult,
    /// The snapshot was written to and must be persisted.
    pub changed: bool,
}

impl Reaction {
    pub const fn updated() -> Self {
        Self {
            result: HookResult::Handled,
            changed: true,
        }
    }

    pub const fn unchanged() -> Self {
        Self {
            result: HookResult::Handled,
            changed: false,
        }
    }

    /// The handler ran the host's default operation itself.
    pub const fn took_over(changed: bool) -> Self {
        Self {
            result: HookResult::SuppressDefault,
            changed,
        }
    }
}
