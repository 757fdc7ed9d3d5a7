pub mod glyph;
pub mod notification;

pub use glyph::Glyph;
pub use notification::{
    Notification, NotificationFilter, NotificationKind, NotificationListResponse,
    UnreadCountResponse,
};
