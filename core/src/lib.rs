pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod handlers;
pub mod host;
pub mod skills;
pub mod state;
pub mod storage;


// Re-exports for convenience
pub use config::LiveFeedConfig;
pub use engine::SyncEngine;
pub use error::{ConfigError, LiveFeedError, SinkError};
pub use events::{EventKind, HookResult, Notification, Source, SubscriptionRegistry};
pub use host::Host;
pub use livefeed_types::Snapshot;
pub use skills::SkillRules;
pub use storage::{JsonFileSink, SnapshotSink};
