//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Network failures are caught at their call sites and surfaced here as
//! short-lived messages; nothing propagates as an unhandled error. The
//! toast stack component renders and dismisses entries.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub toasts: Vec<Toast>,
}

impl NotificationsState {
    /// Push a toast and return its generated id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> String {
        let id = Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            level,
            message: message.into(),
        });
        id
    }

    /// Push an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(ToastLevel::Error, message)
    }

    /// Push a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(ToastLevel::Success, message)
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
