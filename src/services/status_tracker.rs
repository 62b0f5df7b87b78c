use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Homework, Notification};

/// Renders the chat message for one submission.
pub fn parse_status(homework: &Value) -> Result<Notification, AppError> {
    let homework = Homework::from_value(homework)?;
    Ok(Notification::status_changed(&homework))
}

/// Remembers the last notification handed to the messenger.
#[derive(Debug, Default)]
pub struct StatusTracker {
    last_sent: Option<Notification>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sent(&self) -> Option<&Notification> {
        self.last_sent.as_ref()
    }

    /// Returns the notification for the newest submission, or `None` when
    /// there is nothing new to say.
    pub fn pending(&self, homeworks: &[Value]) -> Result<Option<Notification>, AppError> {
        let Some(latest) = homeworks.first() else {
            debug!("No new homework statuses");
            return Ok(None);
        };

        let notification = parse_status(latest)?;
        if self.last_sent.as_ref() == Some(&notification) {
            debug!("Status of \"{}\" unchanged", notification.homework_name);
            return Ok(None);
        }
        Ok(Some(notification))
    }

    pub fn mark_sent(&mut self, notification: Notification) {
        self.last_sent = Some(notification);
    }
}
