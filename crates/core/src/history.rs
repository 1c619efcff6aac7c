//! Bounded, most-recent-first log of finished sessions.

use std::collections::VecDeque;

use crate::types::{SessionSummary, HISTORY_CAPACITY};

/// Oldest entries are evicted once `capacity` is exceeded. Entries are never
/// promoted, so eviction is strictly by age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<SessionSummary>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the front, evicting from the back on overflow.
    pub fn record(&mut self, summary: SessionSummary) {
        self.entries.push_front(summary);
        self.entries.truncate(self.capacity);
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &SessionSummary> {
        self.entries.iter()
    }

    /// Owned copy of the entries, most recent first.
    pub fn entries(&self) -> Vec<SessionSummary> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&SessionSummary> {
        self.entries.front()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
