//! Inbox notifications shown in the dashboard panel

use serde::{Deserialize, Serialize};

use crate::ids::NotificationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
    Message,
    Security,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub text: String,
    pub detail: String,
    /// Relative label such as "2 min ago"; not a parsed timestamp
    pub time_label: String,
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Notification {
    /// Clear the unread flag. Returns true if the flag was set before.
    pub fn mark_read(&mut self) -> bool {
        std::mem::replace(&mut self.unread, false)
    }
}
