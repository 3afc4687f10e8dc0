//! Circular buffer of recent log records.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use log::Level;

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity ring; the oldest entry is dropped when full
#[derive(Debug)]
pub struct RollingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_evicts_oldest() {
        let mut buf = RollingBuffer::new(2);
        buf.push(entry("a"));
        buf.push(entry("b"));
        buf.push(entry("c"));

        let messages: Vec<_> = buf.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["b", "c"]);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut buf = RollingBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.push(entry("a"));
        buf.push(entry("b"));
        assert_eq!(buf.snapshot()[0].message, "b");
    }

    #[test]
    fn test_display() {
        let line = entry("hello").to_string();
        assert!(line.contains("INFO"));
        assert!(line.ends_with("test: hello"));
    }
}
