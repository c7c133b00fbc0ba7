//! # Notifications
//!
//! Transient, dismissible messages produced by operations. The library only
//! builds them; showing them is up to the UI. [`NoticeBoard`] models the
//! single message slot a UI has: `hidden → shown → hidden`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }
}

/// Holds at most one visible notification.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<Notification>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification`, replacing whatever was visible.
    pub fn show(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_shown(&self) -> bool {
        self.current.is_some()
    }

    /// Hides the visible notification, handing it back. Dismissing an empty
    /// board does nothing.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_starts_hidden() {
        let board = NoticeBoard::new();
        assert!(!board.is_shown());
        assert!(board.current().is_none());
    }

    #[test]
    fn show_then_dismiss() {
        let mut board = NoticeBoard::new();
        board.show(Notification::success("Book Added", "ok"));
        assert!(board.is_shown());

        let dismissed = board.dismiss().unwrap();
        assert_eq!(dismissed.severity, Severity::Success);
        assert!(!board.is_shown());
        assert!(board.dismiss().is_none());
    }

    #[test]
    fn show_replaces_visible_notification() {
        let mut board = NoticeBoard::new();
        board.show(Notification::info("First", "a"));
        board.show(Notification::error("Second", "b"));
        assert_eq!(board.current().unwrap().title, "Second");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }
}
