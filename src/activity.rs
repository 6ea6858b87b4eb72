//! Bounded activity log for the chat session
//!
//! Keeps the most recent entries in a fixed-size buffer:
//! - Maximum 10 entries (bounded storage)
//! - FIFO eviction when full
//! - Entries keep their original relative order

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of activity entries kept per session
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

/// A single timestamped log entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl ActivityEntry {
    /// Render as `HH:MM: message`
    pub fn render(&self) -> String {
        format!("{}: {}", self.timestamp.format("%H:%M"), self.message)
    }
}

/// Rolling log of what the bot has done
#[derive(Debug, Clone)]
pub struct ActivityLog {
    /// Circular buffer of entries (bounded by max_entries)
    entries: VecDeque<ActivityEntry>,

    /// Maximum allowed entries
    max_entries: usize,
}

impl ActivityLog {
    /// Create a log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_LOG_CAPACITY)
    }

    /// Create a log with a custom capacity
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Record a message stamped with the current local time
    pub fn record(&mut self, message: impl Into<String>) {
        self.push(ActivityEntry {
            timestamp: Local::now(),
            message: message.into(),
        });
    }

    /// Add an entry, evicting the oldest if at capacity
    pub fn push(&mut self, entry: ActivityEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Messages only, oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Snapshot suitable for a chat reply
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "📝 Nothing logged yet. Ask me something first!".to_string();
        }

        let mut out = String::from("📝 Here's what I've done recently:");
        for entry in &self.entries {
            out.push_str("\n• ");
            out.push_str(&entry.render());
        }
        out
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_capacity() {
        let mut log = ActivityLog::new();

        for i in 0..25 {
            log.record(format!("event {}", i));
        }

        assert_eq!(log.len(), ACTIVITY_LOG_CAPACITY);
        assert_eq!(log.last().unwrap().message, "event 24");
    }

    #[test]
    fn test_fifo_eviction_keeps_order() {
        let mut log = ActivityLog::new();

        for i in 0..11 {
            log.record(format!("event {}", i));
        }

        let expected: Vec<String> = (1..11).map(|i| format!("event {}", i)).collect();
        assert_eq!(log.messages(), expected);
    }

    #[test]
    fn test_custom_capacity() {
        let mut log = ActivityLog::with_capacity(3);
        for i in 0..4 {
            log.record(format!("e{}", i));
        }
        assert_eq!(log.messages(), vec!["e1", "e2", "e3"]);
        assert_eq!(log.capacity(), 3);
    }

    #[test]
    fn test_render_empty() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert!(log.render().contains("Nothing logged yet"));
    }

    #[test]
    fn test_render_lists_entries() {
        let mut log = ActivityLog::new();
        log.record("Responded to topic: phishing");
        log.record("Added task: Buy milk");

        let rendered = log.render();
        assert!(rendered.contains("• "));
        assert!(rendered.contains("Responded to topic: phishing"));
        assert!(rendered.contains("Added task: Buy milk"));
        assert!(rendered.find("phishing").unwrap() < rendered.find("Buy milk").unwrap());
    }
}
