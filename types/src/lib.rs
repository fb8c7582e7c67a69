//! Shared output types for Live Feed.
//!
//! Everything an overlay or other external consumer needs to read the
//! exported snapshot lives here, with no dependency on the core engine.

pub mod formatting;
pub mod item;
pub mod snapshot;

pub use formatting::format_inventory_name;
pub use item::{EquipSlot, ItemCategory, QuickSlot};
pub use snapshot::Snapshot;
