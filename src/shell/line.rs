//! In-progress input line with an editing cursor

use core::str;

/// Capacity of the line buffer in bytes.
///
/// One byte is reserved, so a line holds at most `MAX_LINE_LENGTH - 1`
/// characters.
pub const MAX_LINE_LENGTH: usize = 256;

/// Line input buffer.
///
/// Holds only printable ASCII. Keeps `cursor <= len <= MAX_LINE_LENGTH - 1`
/// across every operation; inserts into a full buffer are dropped rather than
/// growing it.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buf: [u8; MAX_LINE_LENGTH],
    len: usize,
    cursor: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: [0u8; MAX_LINE_LENGTH],
            len: 0,
            cursor: 0,
        }
    }

    /// Maximum number of bytes the line can hold.
    pub const fn capacity(&self) -> usize {
        MAX_LINE_LENGTH - 1
    }

    /// Insert a byte at the cursor, shifting the tail right.
    ///
    /// Returns `false` if the buffer is full.
    pub fn insert(&mut self, byte: u8) -> bool {
        if self.len >= self.capacity() {
            return false;
        }
        if self.cursor < self.len {
            self.buf.copy_within(self.cursor..self.len, self.cursor + 1);
        }
        self.buf[self.cursor] = byte;
        self.cursor += 1;
        self.len += 1;
        true
    }

    /// Remove the byte left of the cursor.
    ///
    /// Returns `false` if the cursor is at the start of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buf.copy_within(self.cursor..self.len, self.cursor - 1);
        self.cursor -= 1;
        self.len -= 1;
        true
    }

    /// Remove the byte under the cursor.
    ///
    /// Returns `false` if the cursor is at the end of the line.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len {
            return false;
        }
        self.buf.copy_within(self.cursor + 1..self.len, self.cursor);
        self.len -= 1;
        true
    }

    /// Move the cursor one position left.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one position right.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to the start of the line.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last byte.
    pub fn end(&mut self) {
        self.cursor = self.len;
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
    }

    /// Replace the contents, truncating to capacity, and park the cursor at
    /// the end.
    pub fn set(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let copy_len = bytes.len().min(self.capacity());
        self.buf[..copy_len].copy_from_slice(&bytes[..copy_len]);
        self.len = copy_len;
        self.cursor = copy_len;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor offset from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
