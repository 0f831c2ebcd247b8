//! Command history
//!
//! A bounded FIFO of committed lines with a browse cursor for arrow-key
//! recall. Storage is static: up to [`MAX_HISTORY_SIZE`] entries of
//! [`MAX_LINE_LENGTH`] bytes each, of which the configured capacity is used.

use heapless::{Deque, String};

use super::error::ShellError;
use super::line::MAX_LINE_LENGTH;

/// Largest history depth a session may configure.
pub const MAX_HISTORY_SIZE: usize = 32;

/// A committed command line.
pub type HistoryEntry = String<MAX_LINE_LENGTH>;

/// Command history.
#[derive(Debug)]
pub struct HistoryBuffer {
    entries: Deque<HistoryEntry, MAX_HISTORY_SIZE>,
    /// Configured depth, at most `MAX_HISTORY_SIZE`
    capacity: usize,
    /// Browse position counted back from the newest entry (0 = not browsing)
    position: usize,
}

impl HistoryBuffer {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`ShellError::OutOfMemory`] if `capacity` exceeds [`MAX_HISTORY_SIZE`].
    pub fn new(capacity: usize) -> Result<Self, ShellError> {
        if capacity > MAX_HISTORY_SIZE {
            return Err(ShellError::OutOfMemory);
        }
        Ok(Self {
            entries: Deque::new(),
            capacity,
            position: 0,
        })
    }

    /// Record a line.
    ///
    /// Empty lines and repeats of the newest entry are skipped. When full,
    /// the oldest entry is evicted first. Resets the browse position.
    ///
    /// # Errors
    ///
    /// [`ShellError::BufferOverflow`] if `line` is longer than an entry can
    /// hold; the history is left untouched.
    pub fn commit(&mut self, line: &str) -> Result<(), ShellError> {
        if self.capacity == 0 || line.is_empty() {
            return Ok(());
        }
        if self.entries.back().is_some_and(|newest| newest.as_str() == line) {
            return Ok(());
        }

        let entry = HistoryEntry::try_from(line).map_err(|_| ShellError::BufferOverflow)?;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
            trace!("history: evicted oldest entry");
        }
        self.entries
            .push_back(entry)
            .map_err(|_| ShellError::OutOfMemory)?;
        self.position = 0;
        Ok(())
    }

    /// Step one entry back in time.
    ///
    /// Returns `None`, leaving the position unchanged, once the oldest entry
    /// has been reached.
    pub fn browse_older(&mut self) -> Option<&str> {
        if self.position >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entry_at(self.position)
    }

    /// Step one entry forward in time.
    ///
    /// Returns the empty string when stepping past the newest entry, and
    /// `None` if not browsing.
    pub fn browse_newer(&mut self) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        if self.position == 0 {
            Some("")
        } else {
            self.entry_at(self.position)
        }
    }

    /// Entry `position` steps back from the newest (1 = newest).
    fn entry_at(&self, position: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(position)?;
        self.entries.iter().nth(index).map(|entry| entry.as_str())
    }

    /// Current browse position (0 = not browsing).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured depth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.as_str())
    }

    /// Drop every entry and stop browsing.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }
}
