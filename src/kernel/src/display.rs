//! Character-grid display surface.
//!
//! [`Screen`] owns a [`TextBuffer`] together with the cursor and attribute
//! state. Every visible character goes through [`Screen::put_char`]; string
//! writes are `put_char` applied byte by byte.
//!
//! When a status row is configured, the bottom row of the buffer is taken
//! out of the scroll region: scrolling, clearing and ordinary output never
//! touch it, and only [`Screen::write_status_line`] writes there.

use core::fmt;

use lumen_common::{Color, ColorCode, ConsoleError, ScreenChar};
use lumen_hal::TextBuffer;

use crate::config::ConsoleConfig;

/// Glyph shown in place of bytes that are not printable ASCII.
pub const PLACEHOLDER: u8 = 0xFE;

/// Text console on top of a cell buffer.
pub struct Screen<B: TextBuffer> {
    buffer: B,
    /// Current row, `0..region_height` (equal to it only mid-scroll).
    row: usize,
    /// Current column, `0..width`.
    column_position: usize,
    /// Attribute for new characters.
    color_code: ColorCode,
    default_color: ColorCode,
    status_color: ColorCode,
    status_bar: bool,
}

impl<B: TextBuffer> Screen<B> {
    /// Wraps `buffer`. Call [`Screen::initialize`] before writing.
    ///
    /// A status row is only reserved when the buffer has at least two rows.
    pub fn new(buffer: B, config: &ConsoleConfig) -> Self {
        let status_bar = config.status_bar && buffer.height() >= 2;
        Screen {
            buffer,
            row: 0,
            column_position: 0,
            color_code: config.default_color,
            default_color: config.default_color,
            status_color: config.status_color,
            status_bar,
        }
    }

    /// Resets the attribute to the default and blanks every cell, including
    /// the status row.
    pub fn initialize(&mut self) {
        self.color_code = self.default_color;
        for row in 0..self.buffer.height() {
            self.clear_row(row);
        }
        self.row = 0;
        self.column_position = 0;
        self.sync_cursor();
    }

    /// Blanks the scroll region at the current attribute and homes the cursor.
    pub fn clear(&mut self) {
        for row in 0..self.region_height() {
            self.clear_row(row);
        }
        self.row = 0;
        self.column_position = 0;
        self.sync_cursor();
    }

    /// Writes a single byte.
    ///
    /// `\n` moves to the start of the next row; anything else is stored as a
    /// glyph and advances the cursor, wrapping at the right edge.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            byte => {
                self.buffer.write_cell(
                    self.row,
                    self.column_position,
                    ScreenChar::new(byte, self.color_code),
                );
                self.column_position += 1;
                if self.column_position >= self.width() {
                    self.new_line();
                }
            }
        }
        self.sync_cursor();
    }

    /// Writes every byte of `s` through [`Screen::put_char`], unfiltered.
    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Erases the character left of the cursor. No-op at column 0.
    pub fn backspace(&mut self) {
        if self.column_position == 0 {
            return;
        }
        self.column_position -= 1;
        self.buffer.write_cell(
            self.row,
            self.column_position,
            ScreenChar::blank(self.color_code),
        );
        self.sync_cursor();
    }

    /// Scrolls the scroll region up by one row.
    ///
    /// The top row is discarded and the last region row is blanked. A cursor
    /// parked just below the region is pulled back onto its last row.
    pub fn scroll(&mut self) {
        let region = self.region_height();
        for row in 1..region {
            for col in 0..self.width() {
                let character = self.buffer.read_cell(row, col);
                self.buffer.write_cell(row - 1, col, character);
            }
        }
        self.clear_row(region - 1);
        if self.row >= region {
            self.row = region - 1;
        }
    }

    /// Renders `text` on the status row.
    ///
    /// Longer text is truncated, shorter text padded with blanks. The cursor
    /// and current attribute are left alone. Does nothing without a status row.
    pub fn write_status_line(&mut self, text: &str) {
        self.write_status_fmt(format_args!("{}", text));
    }

    /// Formatted variant of [`Screen::write_status_line`].
    pub fn write_status_fmt(&mut self, args: fmt::Arguments) {
        if !self.status_bar {
            return;
        }
        let mut line = StatusLine {
            row: self.buffer.height() - 1,
            col: 0,
            color_code: self.status_color,
            buffer: &mut self.buffer,
        };
        // StatusLine::write_str never fails.
        let _ = fmt::Write::write_fmt(&mut line, args);
        line.pad();
    }

    /// Moves the cursor inside the scroll region.
    pub fn set_cursor(&mut self, row: usize, col: usize) -> Result<(), ConsoleError> {
        if row >= self.region_height() || col >= self.width() {
            return Err(ConsoleError::CursorOutOfBounds { row, col });
        }
        self.row = row;
        self.column_position = col;
        self.sync_cursor();
        Ok(())
    }

    /// Current `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.column_position)
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Sets the packed attribute for subsequent writes.
    pub fn set_color_code(&mut self, color_code: ColorCode) {
        self.color_code = color_code;
    }

    /// Current attribute.
    pub fn color(&self) -> ColorCode {
        self.color_code
    }

    /// Attribute restored by [`Screen::initialize`].
    pub fn default_color(&self) -> ColorCode {
        self.default_color
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Number of rows that scroll, excluding the status row.
    pub fn region_height(&self) -> usize {
        if self.status_bar {
            self.buffer.height() - 1
        } else {
            self.buffer.height()
        }
    }

    /// Whether the bottom row is reserved for status output.
    pub fn has_status_bar(&self) -> bool {
        self.status_bar
    }

    /// The underlying cell buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        self.row += 1;
        if self.row >= self.region_height() {
            self.scroll();
        }
    }

    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < self.buffer.height(), "row index out of bounds");

        let blank = ScreenChar::blank(self.color_code);
        for col in 0..self.width() {
            self.buffer.write_cell(row, col, blank);
        }
    }

    fn sync_cursor(&mut self) {
        self.buffer.move_cursor(self.row, self.column_position);
    }
}

impl<B: TextBuffer> fmt::Write for Screen<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or newline
                0x20..=0x7e | b'\n' => self.put_char(byte),
                _ => self.put_char(PLACEHOLDER),
            }
        }
        Ok(())
    }
}

/// Writer bound to the status row.
struct StatusLine<'a, B: TextBuffer> {
    buffer: &'a mut B,
    row: usize,
    col: usize,
    color_code: ColorCode,
}

impl<B: TextBuffer> StatusLine<'_, B> {
    fn pad(&mut self) {
        while self.col < self.buffer.width() {
            self.buffer
                .write_cell(self.row, self.col, ScreenChar::blank(self.color_code));
            self.col += 1;
        }
    }
}

impl<B: TextBuffer> fmt::Write for StatusLine<'_, B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if self.col >= self.buffer.width() {
                break;
            }
            let glyph = match byte {
                0x20..=0x7e => byte,
                _ => PLACEHOLDER,
            };
            self.buffer
                .write_cell(self.row, self.col, ScreenChar::new(glyph, self.color_code));
            self.col += 1;
        }
        Ok(())
    }
}
