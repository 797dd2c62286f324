//! Notification model
//!
//! Transient feedback banners (request sent, profile saved, etc.)
//! shown in the title bar until they expire.

use std::time::Instant;

/// How long a notification stays on screen
const TTL_SECS: u64 = 5;

/// Kind of notification (determines banner color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An action completed (green)
    Success,
    /// Neutral information (cyan)
    Info,
    /// Something was refused or skipped (yellow)
    Warning,
}

/// A transient message shown above the status bar
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a notification of the given kind
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Green "it worked" banner
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Cyan informational banner
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Yellow caution banner
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Whether the banner should be dropped from the screen
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= TTL_SECS
    }
}
