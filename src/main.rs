use chrono::Utc;
use std::time::Duration;

use aperture_notify::{
    state::{AppConfig, AppState},
    utils::time_format::format_relative,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().unwrap();
    let poll_interval = config.poll_interval;
    let app = AppState::new(config).unwrap();

    let _poll_guard = app.sync.start_unread_polling(poll_interval);

    // Tail the feed: open the panel once, then print a snapshot every few
    // seconds so the badge updates from the poll loop are visible.
    app.sync.toggle().await;

    loop {
        let snapshot = app.sync.snapshot().await;
        tracing::info!(
            "{} unread, {} cached entries",
            snapshot.unread_count,
            snapshot.notifications.len()
        );
        let now = Utc::now();
        for notification in &snapshot.notifications {
            tracing::info!(
                "  [{}] {} - {} ({})",
                if notification.read { "read" } else { "new" },
                notification.title,
                notification.message,
                format_relative(notification.created_at, now)
            );
        }

        tokio::time::sleep(Duration::from_secs(15)).await;
    }
}
