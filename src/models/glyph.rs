// src/models/glyph.rs
use crate::models::notification::Notification;

/// Visual glyph shown next to a feed entry. The UI layer maps these to its
/// icon set; anything unmapped falls back to the bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Bell,
    Bullhorn,
    CreditCard,
    Users,
    Calendar,
    InfoCircle,
    AlertTriangle,
    Check,
    CheckDouble,
    Cross,
}

impl Glyph {
    /// Resolve the glyph for a notification. An explicit icon override wins
    /// over the kind mapping; an override that maps to nothing still falls
    /// back to the bell rather than re-trying the kind.
    pub fn resolve(notification: &Notification) -> Glyph {
        let key = notification
            .icon
            .as_deref()
            .unwrap_or(notification.kind.as_str());
        Glyph::from_key(key)
    }

    fn from_key(key: &str) -> Glyph {
        match key {
            "announcement" => Glyph::Bullhorn,
            "payment" => Glyph::CreditCard,
            "team" => Glyph::Users,
            "event" => Glyph::Calendar,
            "system" | "info" => Glyph::InfoCircle,
            "plan" | "security" | "warning" => Glyph::AlertTriangle,
            "success" => Glyph::Check,
            "error" => Glyph::Cross,
            _ => Glyph::Bell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;

    #[test]
    fn test_kind_mapping() {
        let notification =
            Notification::new("n1", NotificationKind::Payment, "Paid", "Invoice settled");
        assert_eq!(Glyph::resolve(&notification), Glyph::CreditCard);
    }

    #[test]
    fn test_override_takes_precedence() {
        let mut notification =
            Notification::new("n1", NotificationKind::Payment, "Paid", "Invoice settled");
        notification.icon = Some("warning".to_string());
        assert_eq!(Glyph::resolve(&notification), Glyph::AlertTriangle);
    }

    #[test]
    fn test_unmapped_override_falls_back_to_bell() {
        let mut notification =
            Notification::new("n1", NotificationKind::Payment, "Paid", "Invoice settled");
        notification.icon = Some("sparkles".to_string());
        assert_eq!(Glyph::resolve(&notification), Glyph::Bell);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_bell() {
        let notification = Notification::new("n1", NotificationKind::Other, "New", "Thing");
        assert_eq!(Glyph::resolve(&notification), Glyph::Bell);
    }
}
