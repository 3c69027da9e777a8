//! Snapshot based undo/redo history.
//!
//! Every content-changing edit appends a full document snapshot with the
//! cursor position. The entry at the current index is always the displayed
//! document; recording after an undo discards the redo tail.

use log::debug;

/// Maximum number of snapshots kept; the oldest is dropped beyond this.
pub const MAX_HISTORY: usize = 50;

/// A recorded document state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Document text at the time of recording
    pub value: String,
    /// Cursor position (byte offset) at the time of recording
    pub cursor: usize,
}

/// Bounded, linear edit history.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    max_entries: usize,
}

impl EditHistory {
    /// Creates history whose first entry is the initial document.
    pub fn new(value: impl Into<String>, cursor: usize) -> Self {
        Self::with_capacity(value, cursor, MAX_HISTORY)
    }

    /// Creates history with a custom entry limit (at least one entry).
    pub fn with_capacity(value: impl Into<String>, cursor: usize, max_entries: usize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                value: value.into(),
                cursor,
            }],
            index: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Entry for the document currently displayed.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Records a snapshot if `value` differs from the current entry.
    ///
    /// Truncates any redo tail, appends the snapshot, makes it current and
    /// drops the oldest entry when the limit is exceeded.
    ///
    /// # Returns
    ///
    /// `true` if a snapshot was recorded
    pub fn record(&mut self, value: &str, cursor: usize) -> bool {
        if self.current().value == value {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            value: value.to_string(),
            cursor,
        });

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
            debug!("Edit history trimmed {} oldest entries", excess);
        }

        self.index = self.entries.len() - 1;
        true
    }

    /// Steps back one entry. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Steps forward one entry. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial document is an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }
}
