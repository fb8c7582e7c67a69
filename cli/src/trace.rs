//! Recorded host traces.
//!
//! A trace is the host's state at activation plus the notifications it
//! delivered afterwards, in order. Steps may carry a new world state, which
//! takes effect before that step's notification is handled.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use livefeed_core::Host;
use livefeed_core::events::{EventKind, Notification, Source, SubscriptionRegistry};
use livefeed_core::host::{Customization, InventoryItem, SaveGame, SaveGameLoad, WorldState};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TraceFile {
    #[serde(default)]
    pub host: HostState,
    #[serde(default)]
    pub events: Vec<TraceStep>,
}

impl TraceFile {
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read trace {}: {e}", path.display()))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("failed to parse trace {}: {e}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostState {
    pub save_game: Option<SaveGame>,
    pub stand_in: Option<Customization>,
    pub stations: HashMap<String, String>,
    pub world: WorldState,
}

#[derive(Debug, Deserialize)]
pub struct TraceStep {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub world: Option<WorldState>,
    #[serde(flatten)]
    pub notification: Notification,
}

/// Host stand-in driven by a trace. Keeps track of which hooks are
/// registered so only those notifications are delivered.
pub struct ScriptedHost {
    state: HostState,
    hooks: HashSet<EventKind>,
}

impl ScriptedHost {
    pub fn new(state: HostState) -> Self {
        Self {
            state,
            hooks: HashSet::new(),
        }
    }

    pub fn is_hooked(&self, kind: EventKind) -> bool {
        self.hooks.contains(&kind)
    }

    pub fn set_world(&mut self, world: WorldState) {
        self.state.world = world;
    }
}

impl SubscriptionRegistry for ScriptedHost {
    fn register(&mut self, event: EventKind, handler_id: &str) {
        tracing::trace!(handler_id, "Hook registered");
        self.hooks.insert(event);
    }

    fn unregister(&mut self, event: EventKind, handler_id: &str) {
        tracing::trace!(handler_id, "Hook removed");
        self.hooks.remove(&event);
    }
}

impl Host for ScriptedHost {
    fn finish_save_game_load(&mut self, load: &SaveGameLoad) {
        tracing::debug!(result = load.params.load_result, "Finishing save game load");
        self.state.save_game = Some(load.save_game.clone());
    }

    fn ready_inventory(&mut self, item: &InventoryItem) {
        tracing::debug!(class = %item.class_name, slot = item.quick_slot, "Readying inventory");
    }

    fn last_loaded_save_game(&self) -> Option<SaveGame> {
        self.state.save_game.clone()
    }

    fn primary_stand_in(&self) -> Option<Customization> {
        self.state.stand_in.clone()
    }

    fn fast_travel_level_name(&self, station: &str) -> Option<String> {
        self.state.stations.get(station).cloned()
    }

    fn world(&self) -> WorldState {
        self.state.world.clone()
    }
}
