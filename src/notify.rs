//! User-visible notifications
//!
//! Operation results are reported as [`Notification`]s and collected in a bounded
//! [`NotificationLog`] that the notifications pane renders newest-last.

use crate::errors::VisualizerError;
use std::collections::VecDeque;

/// How a notification should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single toast-style message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&VisualizerError> for Notification {
    fn from(err: &VisualizerError) -> Self {
        Notification::error(err.title(), err.to_string())
    }
}

impl From<VisualizerError> for Notification {
    fn from(err: VisualizerError) -> Self {
        Notification::from(&err)
    }
}

/// Bounded history of notifications
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        NotificationLog {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a notification, evicting the oldest once full
    pub fn push(&mut self, notification: Notification) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }

    /// Record the outcome of an operation
    pub fn report(&mut self, outcome: Result<Notification, VisualizerError>) {
        match outcome {
            Ok(notification) => self.push(notification),
            Err(err) => self.push(Notification::from(err)),
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = NotificationLog::new(2);
        log.push(Notification::info("a", "1"));
        log.push(Notification::info("b", "2"));
        log.push(Notification::info("c", "3"));

        let titles: Vec<_> = log.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_errors_become_error_notifications() {
        let mut log = NotificationLog::default();
        log.report(Err(VisualizerError::EmptyStructure { structure: "stack" }));

        let latest = log.latest().unwrap();
        assert!(latest.is_error());
        assert_eq!(latest.title, "Empty");
        assert_eq!(latest.description, "The stack is empty");
    }
}
