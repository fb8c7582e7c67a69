pub mod hook;
pub mod notification;

pub use hook::{EventKind, HookResult, SubscriptionRegistry};
pub use notification::{MenuFlow, Notification, Source};
