//! Fixed-capacity input line.

use lumen_common::ConsoleError;

/// Maximum input line length.
pub const MAX_LINE_LENGTH: usize = 256;

/// A line of printable ASCII being edited.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize = MAX_LINE_LENGTH> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// An empty line.
    pub const fn new() -> Self {
        LineBuffer {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Appends a byte, refusing it when the line is full.
    pub fn push(&mut self, byte: u8) -> Result<(), ConsoleError> {
        debug_assert!(byte.is_ascii(), "line buffer holds ASCII only");
        if self.len == N {
            return Err(ConsoleError::LineFull);
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.bytes[self.len])
    }

    /// Empties the line.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The line as text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
