//! Bounded history of accepted lines.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// One accepted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub line: String,
    pub accepted_at: DateTime<Utc>,
}

/// Accepted lines, oldest first. Rejected lines are never recorded.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl CommandHistory {
    /// Create an empty history holding at most `limit` lines.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    /// Record an accepted line, evicting the oldest entry when full.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.limit == 0 {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            line: line.into(),
            accepted_at: Utc::now(),
        });
    }

    /// The most recently accepted line.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let mut history = CommandHistory::new(2);
        history.push("AAL777 fh 180");
        history.push("AAL777 c 80");
        history.push("timewarp 5");

        let lines: Vec<_> = history.iter().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, ["AAL777 c 80", "timewarp 5"]);
        assert_eq!(history.last().map(|e| e.line.as_str()), Some("timewarp 5"));
    }

    #[test]
    fn test_timestamps_are_ordered() {
        let mut history = CommandHistory::new(10);
        history.push("a");
        history.push("b");
        let stamps: Vec<_> = history.iter().map(|e| e.accepted_at).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = CommandHistory::new(0);
        history.push("pause");
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
