//! # User Notices
//!
//! Transient, dismissible messages surfaced to the shopper (toasts).
//! A notice never blocks the flow; blocking decisions live in the session.

use crate::error::StorefrontError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Build an error notice with the customer-facing text for `err`
    pub fn from_error(err: &StorefrontError) -> Self {
        Self::new(NoticeLevel::Error, err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_levels() {
        assert_eq!(Notice::success("added").level, NoticeLevel::Success);
        assert_eq!(Notice::error("failed").level, NoticeLevel::Error);
        assert_eq!(Notice::warning("low stock").level, NoticeLevel::Warning);
    }

    #[test]
    fn test_from_error_prefers_server_message() {
        let err = StorefrontError::CartRejected {
            message: "Item no longer available".into(),
        };
        let notice = Notice::from_error(&err);

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Item no longer available");
    }
}
