//! One-frame debounce for equip/unequip pairs.
//!
//! Swapping a quick slot makes the game report the incoming item as readied
//! and an item as removed, in either order, within the same frame. A lone
//! removal looks identical to a real unequip. Arming a slot when an item is
//! readied lets a removal for that slot in the same frame be dropped, while
//! the next frame tick expires the window so later removals are honored.
//!
//! Windows are tracked per slot, so readying two different slots in one
//! frame does not let a removal on one consume the other's window.

use std::collections::HashSet;

use livefeed_types::EquipSlot;

use crate::events::{EventKind, SubscriptionRegistry};

#[derive(Debug, Default)]
pub struct SuppressionWindow {
    armed: HashSet<EquipSlot>,
}

impl SuppressionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self, slot: EquipSlot) -> bool {
        self.armed.contains(&slot)
    }

    pub fn is_idle(&self) -> bool {
        self.armed.is_empty()
    }

    /// Open a window for `slot` until the next tick. The tick subscription
    /// is taken when the first slot is armed.
    pub fn arm<R: SubscriptionRegistry + ?Sized>(&mut self, slot: EquipSlot, registry: &mut R) {
        let was_idle = self.armed.is_empty();
        self.armed.insert(slot);
        if was_idle {
            registry.register(EventKind::Tick, &EventKind::Tick.handler_id());
        }
    }

    /// Close the window for `slot`, returning whether one was open. The tick
    /// subscription is dropped once no slot remains armed.
    pub fn consume<R: SubscriptionRegistry + ?Sized>(
        &mut self,
        slot: EquipSlot,
        registry: &mut R,
    ) -> bool {
        if !self.armed.remove(&slot) {
            return false;
        }
        if self.armed.is_empty() {
            registry.unregister(EventKind::Tick, &EventKind::Tick.handler_id());
        }
        true
    }

    /// Frame boundary: every open window expires.
    pub fn expire<R: SubscriptionRegistry + ?Sized>(&mut self, registry: &mut R) {
        self.armed.clear();
        registry.unregister(EventKind::Tick, &EventKind::Tick.handler_id());
    }
}
