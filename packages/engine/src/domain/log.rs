//! Append-only game log.

use serde::{Deserialize, Serialize};

use crate::domain::state::Phase;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogTag {
    /// Hidden information; must not be shown to every observer.
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub day: u32,
    pub phase: Phase,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<LogTag>,
}

impl LogEntry {
    pub fn is_private(&self) -> bool {
        self.tags.contains(&LogTag::Private)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, day: u32, phase: Phase, message: impl Into<String>) {
        self.push(day, phase, message.into(), Vec::new());
    }

    pub fn append_private(&mut self, day: u32, phase: Phase, message: impl Into<String>) {
        self.push(day, phase, message.into(), vec![LogTag::Private]);
    }

    fn push(&mut self, day: u32, phase: Phase, message: String, tags: Vec<LogTag>) {
        self.next_id += 1;
        self.entries.push(LogEntry {
            id: format!("log-{}", self.next_id),
            day,
            phase,
            message,
            tags,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Last `n` public entries, oldest first.
    pub fn public_tail(&self, n: usize) -> Vec<LogEntry> {
        let mut tail: Vec<LogEntry> = self
            .entries
            .iter()
            .rev()
            .filter(|e| !e.is_private())
            .take(n)
            .cloned()
            .collect();
        tail.reverse();
        tail
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
