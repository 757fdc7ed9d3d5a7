// src/models/notification.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned by the notification service. Unknown wire values land in
/// `Other` so a feed entry from a newer server version still renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Announcement,
    Payment,
    Team,
    Event,
    System,
    Plan,
    Security,
    Info,
    Success,
    Warning,
    Error,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Announcement => "announcement",
            NotificationKind::Payment => "payment",
            NotificationKind::Team => "team",
            NotificationKind::Event => "event",
            NotificationKind::System => "system",
            NotificationKind::Plan => "plan",
            NotificationKind::Security => "security",
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Other => "other",
        }
    }
}

/// A single feed entry. The server owns these; the client holds a cached,
/// possibly stale copy addressed by `id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Explicit glyph override; takes precedence over the kind mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            icon: None,
            title: title.into(),
            message: message.into(),
            read: false,
            created_at: Utc::now(),
        }
    }
}

/// Client-side list scope. `All` omits the `type` query parameter entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Kind(NotificationKind),
}

impl NotificationFilter {
    /// Value for the `type` query parameter, `None` when unscoped.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            NotificationFilter::All => None,
            NotificationFilter::Kind(kind) => Some(kind.as_str()),
        }
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Kind(kind) => notification.kind == *kind,
        }
    }
}

// Response Models (wire envelopes from the notification service)
//
// Both are tolerant of missing fields: an absent `count` reads as 0 and an
// absent `data` as an empty list.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NotificationListResponse {
    #[serde(default)]
    pub data: Vec<Notification>,
    #[serde(default, rename = "unreadCount")]
    pub unread_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        let json = serde_json::to_string(&NotificationKind::Announcement).unwrap();
        assert_eq!(json, "\"announcement\"");
        let kind: NotificationKind = serde_json::from_str("\"payment\"").unwrap();
        assert_eq!(kind, NotificationKind::Payment);
    }

    #[test]
    fn test_unknown_kind_tolerated() {
        let kind: NotificationKind = serde_json::from_str("\"marketing\"").unwrap();
        assert_eq!(kind, NotificationKind::Other);
    }

    #[test]
    fn test_notification_wire_format() {
        let json = r#"{
            "_id": "64f1c0",
            "type": "payment",
            "title": "Invoice paid",
            "message": "Invoice #1042 was settled",
            "read": true,
            "createdAt": "2026-08-20T10:15:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, "64f1c0");
        assert_eq!(notification.kind, NotificationKind::Payment);
        assert!(notification.read);
        assert!(notification.icon.is_none());
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let response: UnreadCountResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.count, 0);
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let response: NotificationListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.unread_count, 0);
    }

    #[test]
    fn test_filter_query_value() {
        assert_eq!(NotificationFilter::All.query_value(), None);
        assert_eq!(
            NotificationFilter::Kind(NotificationKind::Announcement).query_value(),
            Some("announcement")
        );
    }

    #[test]
    fn test_filter_matches() {
        let notification =
            Notification::new("n1", NotificationKind::System, "Maintenance", "Tonight");
        assert!(NotificationFilter::All.matches(&notification));
        assert!(NotificationFilter::Kind(NotificationKind::System).matches(&notification));
        assert!(!NotificationFilter::Kind(NotificationKind::Payment).matches(&notification));
    }
}
