//! User-facing notifications (toasts).
//!
//! The settings flow never talks to a global toast channel; a
//! [`NotificationSink`] is handed to whoever needs to surface outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single notification for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// A default-variant toast titled "Success".
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: ToastVariant::Default,
            created_at: Utc::now(),
        }
    }

    /// A destructive toast titled "Error".
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
            created_at: Utc::now(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Receives toasts for display.
///
/// Implementations must not block: they are called from inside the
/// submission flow.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, toast: Toast);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors() {
        let ok = Toast::success("Social links updated successfully");
        assert_eq!(ok.title, "Success");
        assert!(!ok.is_destructive());

        let err = Toast::error("Username already taken");
        assert_eq!(err.title, "Error");
        assert_eq!(err.variant, ToastVariant::Destructive);
    }
}
