//! # Notifications
//!
//! Transient user-facing messages raised by cart operations.
//!
//! Notifications travel over a `tokio::sync::broadcast` channel owned by
//! the store. Delivery is best effort: no subscriber, or a subscriber that
//! lags past the channel capacity, never blocks or fails a mutation. The
//! message text is a product decision; only the triggering conditions are
//! contractual (see the store operations).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Severity
// =============================================================================

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Confirmation of a successful action.
    Info,
    /// The action was rejected or failed.
    Error,
}

// =============================================================================
// Notification
// =============================================================================

/// A transient user-facing notification.
///
/// The `id` lets a UI dismiss or de-duplicate individual toasts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique id for this notification instance.
    #[ts(as = "String")]
    pub id: Uuid,

    /// Presentation severity.
    pub severity: Severity,

    /// Human-readable message for display.
    pub message: String,

    /// When the notification was raised.
    #[ts(as = "String")]
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    /// Creates an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Notification::new(Severity::Info, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Notification::new(Severity::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let info = Notification::info("added");
        assert_eq!(info.severity, Severity::Info);
        assert_eq!(info.message, "added");

        let error = Notification::error("failed");
        assert_eq!(error.severity, Severity::Error);
    }

    #[test]
    fn test_each_notification_gets_its_own_id() {
        let a = Notification::info("same text");
        let b = Notification::info("same text");
        assert_ne!(a.id, b.id);
    }
}
