//! Synchronization engine.
//!
//! Owns the snapshot and the suppression window, routes host notifications
//! to their handlers and persists the full snapshot after every accepted
//! change. The host delivers notifications one at a time, so nothing here
//! is shared or locked.

use livefeed_types::Snapshot;

use crate::error::LiveFeedError;
use crate::events::{EventKind, HookResult, Notification, Source};
use crate::handlers::{Reaction, inventory, presence, progression, reload};
use crate::host::Host;
use crate::skills::SkillRules;
use crate::state::SuppressionWindow;
use crate::storage::SnapshotSink;

pub struct SyncEngine<S> {
    snapshot: Snapshot,
    suppression: SuppressionWindow,
    skill_rules: SkillRules,
    sink: S,
    active: bool,
}

impl<S: SnapshotSink> SyncEngine<S> {
    pub fn new(sink: S, skill_rules: SkillRules) -> Self {
        Self {
            snapshot: Snapshot::new(),
            suppression: SuppressionWindow::new(),
            skill_rules,
            sink,
            active: false,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn suppression(&self) -> &SuppressionWindow {
        &self.suppression
    }

    /// Rebuild the snapshot from the running session, then hook every
    /// tracked notification.
    pub fn activate<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<(), LiveFeedError> {
        if self.active {
            tracing::warn!("Live feed already active");
            return Ok(());
        }

        let reaction = reload::reload(&mut self.snapshot, &self.skill_rules, host, None);
        self.commit(reaction)?;

        for kind in EventKind::PERSISTENT {
            host.register(kind, &kind.handler_id());
        }
        self.active = true;

        tracing::info!(
            name = self.snapshot.name.as_deref().unwrap_or("<none>"),
            class = self.snapshot.class.as_deref().unwrap_or("<none>"),
            "Live feed activated"
        );
        Ok(())
    }

    /// Unhook everything `activate` hooked, plus a pending tick.
    pub fn deactivate<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.active {
            return;
        }

        for kind in EventKind::PERSISTENT {
            host.unregister(kind, &kind.handler_id());
        }
        if !self.suppression.is_idle() {
            self.suppression.expire(host);
        }
        self.active = false;

        tracing::info!("Live feed deactivated");
    }

    /// Route one host notification and persist the snapshot if it changed.
    ///
    /// Storage failures are returned to the caller; the in-memory snapshot
    /// keeps the change and the next accepted update writes it again.
    pub fn dispatch<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        source: Source,
        notification: &Notification,
    ) -> Result<HookResult, LiveFeedError> {
        if !self.active {
            tracing::debug!(kind = ?notification.kind(), "Notification ignored while inactive");
            return Ok(HookResult::Handled);
        }

        tracing::debug!(kind = ?notification.kind(), ?source, "Handling notification");

        let snapshot = &mut self.snapshot;
        let rules = &self.skill_rules;
        let window = &mut self.suppression;

        let reaction = match notification {
            Notification::SaveGameLoaded { load } => {
                reload::reload(snapshot, rules, host, load.as_ref())
            }
            Notification::SkillGradeChanged { skills } => {
                progression::skill_grade_changed(snapshot, rules, skills)
            }
            Notification::ExpLevelChanged { level } => {
                progression::exp_level_changed(snapshot, *level)
            }
            Notification::OverpowerIncremented {
                levels_unlocked,
                increment,
                maximum,
            } => progression::overpower_incremented(snapshot, *levels_unlocked, *increment, *maximum),
            Notification::PlaythroughCompleted { number } => {
                progression::playthrough_completed(snapshot, *number)
            }
            Notification::Teleported { pawn } => presence::teleported(snapshot, rules, host, pawn),
            Notification::MenuClosed { owner, .. } => {
                presence::menu_closed(snapshot, rules, host, owner)
            }
            Notification::InventoryReadied { item } => {
                inventory::readied(snapshot, window, host, source, item)
            }
            Notification::InventoryRemoved { item } => {
                inventory::removed(snapshot, window, host, source, item)
            }
            Notification::QuickSlotSwitched { item, new_slot } => {
                inventory::quick_slot_switched(snapshot, source, item, *new_slot)
            }
            Notification::Tick => inventory::tick(window, host),
        };

        self.commit(reaction)
    }

    fn commit(&mut self, reaction: Reaction) -> Result<HookResult, LiveFeedError> {
        if reaction.changed {
            self.sink.store(&self.snapshot)?;
        }
        Ok(reaction.result)
    }
}
