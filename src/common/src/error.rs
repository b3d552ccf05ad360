//! Console-wide error types.

use core::fmt;

/// Errors reported by console operations.
///
/// Most of the console silently ignores bad input; these are the few places
/// where a caller can find out that a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsoleError {
    /// A direct cursor move fell outside the scroll region.
    CursorOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The line buffer is at capacity.
    LineFull,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::CursorOutOfBounds { row, col } => {
                write!(f, "cursor position ({}, {}) out of bounds", row, col)
            }
            ConsoleError::LineFull => write!(f, "line buffer full"),
        }
    }
}
