pub mod api_client;
pub mod sync_service;

pub use api_client::{ApiConfig, HttpNotificationApi, MockNotificationApi, NotificationApi};
pub use sync_service::{NotificationSync, PollGuard, SyncSnapshot, DEFAULT_POLL_INTERVAL};
