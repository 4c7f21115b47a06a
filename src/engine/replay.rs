//! Append-only replay log.
//!
//! Entries are recorded in the order events were resolved and are never
//! reordered or removed. The engine hands the log to the caller by value
//! once the battle is over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One resolved event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEntry {
    /// Position in the log, starting at 1.
    pub sequence: u32,
    /// Battle time at which the event was resolved.
    pub at: Duration,
    /// Human-readable description.
    pub text: String,
}

impl fmt::Display for ReplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered record of everything that happened in a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayLog {
    entries: Vec<ReplayEntry>,
}

impl ReplayLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its sequence number.
    pub fn record(&mut self, at: Duration, text: impl Into<String>) -> u32 {
        let sequence = self.entries.len() as u32 + 1;
        self.entries.push(ReplayEntry {
            sequence,
            at,
            text: text.into(),
        });
        sequence
    }

    #[must_use]
    pub fn entries(&self) -> &[ReplayEntry] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&ReplayEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplayEntry> {
        self.entries.iter()
    }

    /// Entry texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ReplayLog {
    type Item = &'a ReplayEntry;
    type IntoIter = std::slice::Iter<'a, ReplayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
