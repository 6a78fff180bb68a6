//! Transient alert banners shown at the top of the page.
//!
//! Alerts stack newest-first and dismiss themselves five seconds after being
//! posted. Expiry is checked against a caller-supplied clock so the page loop
//! decides when to sweep.

use std::collections::VecDeque;
use std::time::Instant;

use derive_more::Display;

use crate::constants::ALERT_DISMISS_AFTER;

/// Severity of an alert. Maps onto the Bootstrap contextual classes, with
/// `error` rendered as `danger`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum AlertKind {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[default]
    #[display("info")]
    Info,
}

impl AlertKind {
    /// The Bootstrap class suffix for this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// A single banner: what to say, how to style it, and when it was posted.
#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    posted_at: Instant,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            posted_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }

    pub fn posted_at(&self) -> Instant {
        self.posted_at
    }

    /// The full class list of the rendered banner element.
    pub fn css_classes(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show",
            self.kind.css_class()
        )
    }

    /// Whether the banner has outlived its five seconds at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= ALERT_DISMISS_AFTER
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

/// The stack of banners currently on screen, newest first.
#[derive(Debug, Clone, Default)]
pub struct AlertStack {
    alerts: VecDeque<Alert>,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a banner on top of the stack.
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push_front(alert);
    }

    /// Drops every banner that has expired by `now`.
    pub fn sweep_at(&mut self, now: Instant) {
        self.alerts.retain(|alert| !alert.is_expired_at(now));
    }

    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    /// Removes one banner by its position from the top, as when the user
    /// clicks its dismiss button.
    pub fn dismiss(&mut self, index: usize) -> Option<Alert> {
        self.alerts.remove(index)
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }

    /// The banners on screen, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_maps_to_danger_class() {
        assert_eq!(AlertKind::Error.css_class(), "danger");
        assert_eq!(AlertKind::Success.css_class(), "success");
        assert_eq!(AlertKind::Warning.css_class(), "warning");
        assert_eq!(AlertKind::Info.css_class(), "info");

        let alert = Alert::error("Something broke");
        assert_eq!(
            alert.css_classes(),
            "alert alert-danger alert-dismissible fade show"
        );
    }

    #[test]
    fn test_default_kind_is_info() {
        assert_eq!(AlertKind::default(), AlertKind::Info);
        assert_eq!(AlertKind::Error.to_string(), "error");
    }

    #[test]
    fn test_expiry_after_dismiss_interval() {
        let alert = Alert::info("hello");
        assert!(!alert.is_expired_at(alert.posted_at()));
        assert!(!alert.is_expired_at(alert.posted_at() + ALERT_DISMISS_AFTER / 2));
        assert!(alert.is_expired_at(alert.posted_at() + ALERT_DISMISS_AFTER));
    }

    #[test]
    fn test_stack_orders_newest_first() {
        let mut stack = AlertStack::new();
        stack.push(Alert::info("first"));
        stack.push(Alert::error("second"));

        let messages: Vec<&str> = stack.iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_sweep_drops_expired_banners() {
        let mut stack = AlertStack::new();
        let alert = Alert::info("transient");
        let posted_at = alert.posted_at();
        stack.push(alert);

        stack.sweep_at(posted_at);
        assert_eq!(stack.len(), 1, "A fresh banner survives a sweep");

        stack.sweep_at(posted_at + ALERT_DISMISS_AFTER);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_manual_dismiss_by_position() {
        let mut stack = AlertStack::new();
        stack.push(Alert::info("older"));
        stack.push(Alert::info("newer"));

        let dismissed = stack.dismiss(0);
        assert_eq!(dismissed.map(|a| a.message), Some("newer".to_string()));
        assert_eq!(stack.len(), 1);
        assert!(stack.dismiss(5).is_none());
    }
}
