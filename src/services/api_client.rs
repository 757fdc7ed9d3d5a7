// src/services/api_client.rs
use async_trait::async_trait;
use reqwest::Method;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::{
    errors::{NotifyError, NotifyResult},
    models::notification::{
        Notification, NotificationFilter, NotificationListResponse, UnreadCountResponse,
    },
};

/// Remote notification service contract. One method per endpoint; the sync
/// engine never talks HTTP directly.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn fetch_unread_count(&self) -> NotifyResult<u32>;
    async fn fetch_notifications(
        &self,
        filter: NotificationFilter,
    ) -> NotifyResult<NotificationListResponse>;
    async fn mark_read(&self, id: &str) -> NotifyResult<()>;
    async fn mark_all_read(&self) -> NotifyResult<()>;
    async fn dismiss(&self, id: &str) -> NotifyResult<()>;
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            auth_token: None,
            request_timeout: Duration::from_secs(10),
        }
    }
}

pub struct HttpNotificationApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpNotificationApi {
    pub fn new(config: ApiConfig) -> NotifyResult<Self> {
        if config.base_url.is_empty() {
            return Err(NotifyError::InvalidUrl("empty base URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn ensure_success(response: reqwest::Response) -> NotifyResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NotifyError::server_error(status.as_u16(), body));
        }
        Ok(response)
    }
}

#[async_trait]
impl NotificationApi for HttpNotificationApi {
    async fn fetch_unread_count(&self) -> NotifyResult<u32> {
        let response = self
            .request(Method::GET, "/notifications/unread-count")
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let body: UnreadCountResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::malformed(e.to_string()))?;
        Ok(body.count)
    }

    async fn fetch_notifications(
        &self,
        filter: NotificationFilter,
    ) -> NotifyResult<NotificationListResponse> {
        let mut request = self.request(Method::GET, "/notifications");
        if let Some(kind) = filter.query_value() {
            request = request.query(&[("type", kind)]);
        }

        let response = request.send().await?;
        let response = Self::ensure_success(response).await?;

        response
            .json()
            .await
            .map_err(|e| NotifyError::malformed(e.to_string()))
    }

    async fn mark_read(&self, id: &str) -> NotifyResult<()> {
        let response = self
            .request(Method::POST, &format!("/notifications/{}/read", id))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> NotifyResult<()> {
        let response = self
            .request(Method::POST, "/notifications/mark-all-read")
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn dismiss(&self, id: &str) -> NotifyResult<()> {
        let response = self
            .request(Method::POST, &format!("/notifications/{}/dismiss", id))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// In-memory service for development and testing. Keeps its own copy of the
/// feed, records every call, and can be told to fail the next request to
/// exercise the fail-silent paths.
pub struct MockNotificationApi {
    notifications: Mutex<Vec<Notification>>,
    calls: Mutex<Vec<String>>,
    fail_next: AtomicBool,
}

impl MockNotificationApi {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Mutex::new(notifications),
            calls: Mutex::new(Vec::new()),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Sample feed used when no real service is configured.
    pub fn sample() -> Self {
        use crate::models::notification::NotificationKind;

        let mut welcome = Notification::new(
            "sample-1",
            NotificationKind::Announcement,
            "Welcome to Aperture",
            "Your studio workspace is ready.",
        );
        welcome.read = true;
        let payment = Notification::new(
            "sample-2",
            NotificationKind::Payment,
            "Invoice paid",
            "Invoice #1042 was settled by the client.",
        );
        let maintenance = Notification::new(
            "sample-3",
            NotificationKind::System,
            "Scheduled maintenance",
            "The booking service restarts tonight at 02:00.",
        );

        Self::seeded(vec![welcome, payment, maintenance])
    }

    /// Make the next API call fail with a connection error.
    pub fn fail_next_request(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Calls recorded so far, e.g. `list:announcement` or `read:n1`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) -> NotifyResult<()> {
        self.calls.lock().await.push(call);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NotifyError::NetworkConnection(
                "mock connection refused".to_string(),
            ));
        }
        Ok(())
    }

    async fn unread_total(&self) -> u32 {
        self.notifications
            .lock()
            .await
            .iter()
            .filter(|n| !n.read)
            .count() as u32
    }
}

impl Default for MockNotificationApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationApi for MockNotificationApi {
    async fn fetch_unread_count(&self) -> NotifyResult<u32> {
        self.record("unread-count".to_string()).await?;
        let count = self.unread_total().await;
        tracing::info!("[MOCK] Unread count requested: {}", count);
        Ok(count)
    }

    async fn fetch_notifications(
        &self,
        filter: NotificationFilter,
    ) -> NotifyResult<NotificationListResponse> {
        self.record(format!(
            "list:{}",
            filter.query_value().unwrap_or("all")
        ))
        .await?;

        let data: Vec<Notification> = self
            .notifications
            .lock()
            .await
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        // The real service reports the unfiltered unread total alongside any
        // scoped list.
        let unread_count = self.unread_total().await;

        tracing::info!("[MOCK] Returning {} notifications", data.len());
        Ok(NotificationListResponse { data, unread_count })
    }

    async fn mark_read(&self, id: &str) -> NotifyResult<()> {
        self.record(format!("read:{}", id)).await?;
        let mut notifications = self.notifications.lock().await;
        if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
        tracing::info!("[MOCK] Marked notification read: {}", id);
        Ok(())
    }

    async fn mark_all_read(&self) -> NotifyResult<()> {
        self.record("mark-all-read".to_string()).await?;
        for notification in self.notifications.lock().await.iter_mut() {
            notification.read = true;
        }
        tracing::info!("[MOCK] Marked all notifications read");
        Ok(())
    }

    async fn dismiss(&self, id: &str) -> NotifyResult<()> {
        self.record(format!("dismiss:{}", id)).await?;
        self.notifications.lock().await.retain(|n| n.id != id);
        tracing::info!("[MOCK] Dismissed notification: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;

    #[tokio::test]
    async fn test_mock_counts_unread() {
        let mut read = Notification::new("n1", NotificationKind::Info, "A", "a");
        read.read = true;
        let api = MockNotificationApi::seeded(vec![
            read,
            Notification::new("n2", NotificationKind::Payment, "B", "b"),
            Notification::new("n3", NotificationKind::System, "C", "c"),
        ]);

        assert_eq!(api.fetch_unread_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mock_list_is_scoped_but_count_is_not() {
        let api = MockNotificationApi::seeded(vec![
            Notification::new("n1", NotificationKind::Announcement, "A", "a"),
            Notification::new("n2", NotificationKind::Payment, "B", "b"),
        ]);

        let response = api
            .fetch_notifications(NotificationFilter::Kind(NotificationKind::Announcement))
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "n1");
        assert_eq!(response.unread_count, 2);
    }

    #[tokio::test]
    async fn test_mock_fail_next_clears_after_one_call() {
        let api = MockNotificationApi::new();
        api.fail_next_request();

        assert!(api.fetch_unread_count().await.is_err());
        assert!(api.fetch_unread_count().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let api = MockNotificationApi::new();
        let _ = api.fetch_notifications(NotificationFilter::All).await;
        let _ = api.mark_read("n9").await;

        assert_eq!(api.calls().await, vec!["list:all", "read:n9"]);
    }

    #[test]
    fn test_http_api_rejects_empty_base_url() {
        let config = ApiConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            HttpNotificationApi::new(config),
            Err(NotifyError::InvalidUrl(_))
        ));
    }
}
