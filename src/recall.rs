//! Up/down-arrow recall of previously submitted commands.

use std::collections::VecDeque;

pub const DEFAULT_RECALL_CAPACITY: usize = 50;

/// Previously submitted commands, most recent first, with a navigation cursor.
///
/// The cursor is either `None` ("not recalling") or a valid index into the
/// list. Navigation never modifies the list itself.
#[derive(Debug)]
pub struct RecallList {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl RecallList {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Record a submission at the front, dropping the oldest past capacity.
    pub fn push(&mut self, command: String) {
        self.entries.push_front(command);
        self.entries.truncate(self.capacity);
        self.cursor = None;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Step towards older entries. Returns the entry now selected, or `None`
    /// when nothing moved.
    pub fn older(&mut self) -> Option<&str> {
        let next = match self.cursor {
            None if !self.entries.is_empty() => 0,
            Some(index) if index + 1 < self.entries.len() => index + 1,
            _ => return None,
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step towards newer entries. `Some(None)` means the cursor left the list
    /// and the input should be emptied; `None` means nothing moved.
    pub fn newer(&mut self) -> Option<Option<&str>> {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                Some(None)
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                Some(self.entries.get(index - 1).map(String::as_str))
            }
            None => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
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
}

impl Default for RecallList {
    fn default() -> Self {
        Self::new(DEFAULT_RECALL_CAPACITY)
    }
}
