// src/services/sync_service.rs
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing;

use crate::{
    models::notification::{Notification, NotificationFilter},
    services::api_client::NotificationApi,
};

/// Badge poll cadence when the caller does not pick one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Default)]
struct SyncState {
    panel_open: bool,
    notifications: Vec<Notification>,
    unread_count: u32,
    loading: bool,
    filter: NotificationFilter,
    last_error: Option<String>,
}

/// Read-only view of the sync state at one instant.
#[derive(Debug, Clone)]
pub struct SyncSnapshot {
    pub panel_open: bool,
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
    pub loading: bool,
    pub filter: NotificationFilter,
    pub last_error: Option<String>,
}

/// Client-side synchronization engine for the notification feed.
///
/// Holds the cached list and the unread badge, refreshes them from the
/// remote service, and applies optimistic local mutations for read/dismiss
/// actions. Every remote failure is swallowed: logged at debug, recorded in
/// `last_error`, never surfaced as an error state. The panel keeps showing
/// stale or empty data instead.
///
/// The badge count has two writers that are never reconciled: the poll loop
/// and the list response envelope. Whichever lands last wins. The same goes
/// for overlapping list fetches from rapid toggling; there is no request
/// de-duplication, matching the service's other clients.
pub struct NotificationSync {
    api: Arc<dyn NotificationApi>,
    state: Mutex<SyncState>,
}

impl NotificationSync {
    pub fn new(api: Arc<dyn NotificationApi>) -> Self {
        Self {
            api,
            state: Mutex::new(SyncState::default()),
        }
    }

    pub async fn snapshot(&self) -> SyncSnapshot {
        let state = self.state.lock().await;
        SyncSnapshot {
            panel_open: state.panel_open,
            notifications: state.notifications.clone(),
            unread_count: state.unread_count,
            loading: state.loading,
            filter: state.filter,
            last_error: state.last_error.clone(),
        }
    }

    pub async fn unread_count(&self) -> u32 {
        self.state.lock().await.unread_count
    }

    pub async fn is_panel_open(&self) -> bool {
        self.state.lock().await.panel_open
    }

    /// Flip the panel open or closed. Opening refreshes the list; closing
    /// keeps the cached entries and badge so the next open shows them while
    /// the refetch runs.
    pub async fn toggle(&self) {
        let opened = {
            let mut state = self.state.lock().await;
            state.panel_open = !state.panel_open;
            state.panel_open
        };

        if opened {
            self.refresh_list().await;
        }
    }

    /// Change the list scope. The stale list is dropped immediately; a
    /// refetch only happens while the panel is open (a closed panel fetches
    /// on its next open anyway).
    pub async fn set_filter(&self, filter: NotificationFilter) {
        let refetch = {
            let mut state = self.state.lock().await;
            state.filter = filter;
            state.notifications.clear();
            if state.panel_open {
                state.loading = true;
            }
            state.panel_open
        };

        if refetch {
            self.refresh_list().await;
        }
    }

    /// Refresh the unread badge from the count endpoint. On failure the
    /// previous value stays on screen.
    pub async fn refresh_unread_count(&self) {
        match self.api.fetch_unread_count().await {
            Ok(count) => {
                let mut state = self.state.lock().await;
                state.unread_count = count;
                state.last_error = None;
            }
            Err(err) => {
                tracing::debug!("Error fetching unread count: {}", err);
                self.state.lock().await.last_error = Some(err.to_string());
            }
        }
    }

    /// Fetch the list for the current filter. The response carries its own
    /// unread total, which replaces whatever the poll loop last wrote.
    pub async fn refresh_list(&self) {
        let filter = {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.filter
        };

        match self.api.fetch_notifications(filter).await {
            Ok(response) => {
                let mut state = self.state.lock().await;
                state.notifications = response.data;
                state.unread_count = response.unread_count;
                state.loading = false;
                state.last_error = None;
            }
            Err(err) => {
                tracing::debug!("Error fetching notifications: {}", err);
                let mut state = self.state.lock().await;
                state.loading = false;
                state.last_error = Some(err.to_string());
            }
        }
    }

    /// Mark one notification read. The local flag and badge move first; the
    /// server call is fire-and-forget; a failure is not rolled back, the
    /// next poll or refetch reconciles.
    pub async fn mark_read(&self, id: &str) {
        {
            let mut state = self.state.lock().await;
            if let Some(notification) = state.notifications.iter_mut().find(|n| n.id == id) {
                notification.read = true;
            }
            state.unread_count = state.unread_count.saturating_sub(1);
        }

        if let Err(err) = self.api.mark_read(id).await {
            tracing::debug!("Error marking notification read: {}", err);
            self.state.lock().await.last_error = Some(err.to_string());
        }
    }

    /// Mark every cached notification read and zero the badge, then tell the
    /// server. No rollback on failure.
    pub async fn mark_all_read(&self) {
        {
            let mut state = self.state.lock().await;
            for notification in &mut state.notifications {
                notification.read = true;
            }
            state.unread_count = 0;
        }

        if let Err(err) = self.api.mark_all_read().await {
            tracing::debug!("Error marking all notifications read: {}", err);
            self.state.lock().await.last_error = Some(err.to_string());
        }
    }

    /// Remove one notification from the cached list, then tell the server.
    /// The badge is left alone whatever the entry's read state; the next
    /// refresh corrects any drift. Unknown ids are a local no-op but the
    /// dismiss call is still issued.
    pub async fn dismiss(&self, id: &str) {
        {
            let mut state = self.state.lock().await;
            state.notifications.retain(|n| n.id != id);
        }

        if let Err(err) = self.api.dismiss(id).await {
            tracing::debug!("Error dismissing notification: {}", err);
            self.state.lock().await.last_error = Some(err.to_string());
        }
    }

    /// Route a global pointer-down event. A press outside the panel bounds
    /// closes an open panel; the embedding UI only forwards these while the
    /// panel is open, so a closed panel costs nothing.
    pub async fn handle_pointer_down(&self, inside_panel: bool) {
        let mut state = self.state.lock().await;
        if state.panel_open && !inside_panel {
            state.panel_open = false;
        }
    }

    /// Start the badge poll loop: one refresh immediately, then one per
    /// interval, independent of panel visibility. The returned guard aborts
    /// the task when dropped, so the loop cannot outlive its owner.
    pub fn start_unread_polling(self: &Arc<Self>, interval: Duration) -> PollGuard {
        let sync = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                sync.refresh_unread_count().await;
            }
        });

        tracing::info!("Started unread-count polling every {:?}", interval);
        PollGuard { handle }
    }
}

/// Handle for the poll loop. Dropping it tears the loop down.
pub struct PollGuard {
    handle: JoinHandle<()>,
}

impl PollGuard {
    pub fn stop(self) {
        // Drop does the work.
    }
}

impl Drop for PollGuard {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Stopped unread-count polling");
    }
}
