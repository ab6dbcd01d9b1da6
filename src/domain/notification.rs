// Notification domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub read: bool,
}

#[derive(Debug, Clone)]
pub struct NotificationRegistry {
    notifications: Vec<Notification>,
}

impl NotificationRegistry {
    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark a notification read. Idempotent; unknown ids are a no-op.
    /// Returns whether anything changed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        }
    }
}
