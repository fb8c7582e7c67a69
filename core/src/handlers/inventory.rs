//! Equip, unequip and quick-slot handlers.
//!
//! Only notifications raised by the local player's inventory manager are
//! tracked; anything else is passed straight through to the host.

use livefeed_types::{QuickSlot, Snapshot};

use super::Reaction;
use crate::events::{Source, SubscriptionRegistry};
use crate::host::{Host, InventoryItem};
use crate::state::SuppressionWindow;

/// Ready the item through the host, record its name in its slot and open a
/// suppression window for that slot.
pub fn readied<H: Host + ?Sized>(
    snapshot: &mut Snapshot,
    window: &mut SuppressionWindow,
    host: &mut H,
    source: Source,
    item: &InventoryItem,
) -> Reaction {
    if !source.is_local_player() {
        return Reaction::unchanged();
    }

    host.ready_inventory(item);

    let Some(slot) = item.equip_slot() else {
        return Reaction::took_over(false);
    };

    snapshot.set_slot(slot, item.display_name.clone());
    window.arm(slot, host);
    Reaction::took_over(true)
}

/// Clear the item's slot, unless a readied item claimed it this frame.
pub fn removed<R: SubscriptionRegistry + ?Sized>(
    snapshot: &mut Snapshot,
    window: &mut SuppressionWindow,
    registry: &mut R,
    source: Source,
    item: &InventoryItem,
) -> Reaction {
    if !source.is_local_player() {
        return Reaction::unchanged();
    }

    let Some(slot) = item.equip_slot() else {
        return Reaction::unchanged();
    };

    if window.consume(slot, registry) {
        tracing::debug!(?slot, "Removal superseded by readied item");
        return Reaction::unchanged();
    }

    snapshot.set_slot(slot, None);
    Reaction::updated()
}

/// Move recorded names between quick slots without re-deriving them.
pub fn quick_slot_switched(
    snapshot: &mut Snapshot,
    source: Source,
    item: &InventoryItem,
    new_slot: i32,
) -> Reaction {
    if !source.is_local_player() {
        return Reaction::unchanged();
    }

    match (QuickSlot::new(item.quick_slot), QuickSlot::new(new_slot)) {
        (Some(from), Some(to)) => {
            snapshot.swap_weapons(from, to);
            Reaction::updated()
        }
        _ => {
            tracing::debug!(
                from = item.quick_slot,
                to = new_slot,
                "Quick slot switch outside tracked slots"
            );
            Reaction::unchanged()
        }
    }
}

/// Frame boundary: pending equips have settled.
pub fn tick<R: SubscriptionRegistry + ?Sized>(
    window: &mut SuppressionWindow,
    registry: &mut R,
) -> Reaction {
    window.expire(registry);
    Reaction::unchanged()
}
