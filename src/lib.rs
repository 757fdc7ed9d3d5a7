pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;


// Re-export commonly used types
pub use errors::{NotifyError, NotifyResult};
pub use models::{Glyph, Notification, NotificationFilter, NotificationKind};
pub use services::{NotificationApi, NotificationSync, PollGuard, SyncSnapshot};
