//! Hardware doubles for running the console off the bare metal.
//!
//! These implement the HAL traits with plain memory so that the display,
//! decoder and shell can be exercised by host tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lumen_kernel::testutil::{FakePlatform, MemoryBuffer, TypedText};
//! ```
//!
//! Scripted key sources panic once they run dry, so a test that waits for
//! more input than it provided fails instead of hanging.

use lumen_common::{ColorCode, ScreenChar};
use lumen_hal::{PowerControl, RealTimeClock, ScancodeSource, TextBuffer};

use crate::keyboard::{
    LEFT_SHIFT_BREAK, LEFT_SHIFT_MAKE, PRIMARY, SHIFTED_TOP_ROW, TOP_ROW_FIRST,
};
use crate::peripherals::rtc::{HOURS_REGISTER, MINUTES_REGISTER};

/// In-memory `W x H` cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBuffer<const W: usize, const H: usize> {
    cells: [[ScreenChar; W]; H],
    cursor: (usize, usize),
}

impl<const W: usize, const H: usize> MemoryBuffer<W, H> {
    /// A grid of zeroed cells, like display memory at power-on.
    pub fn new() -> Self {
        MemoryBuffer {
            cells: [[ScreenChar::new(0, ColorCode::from_byte(0)); W]; H],
            cursor: (0, 0),
        }
    }

    /// A single cell.
    pub fn cell(&self, row: usize, col: usize) -> ScreenChar {
        self.cells[row][col]
    }

    /// The glyphs of one row.
    pub fn line(&self, row: usize) -> [u8; W] {
        let mut glyphs = [0u8; W];
        for (glyph, cell) in glyphs.iter_mut().zip(self.cells[row].iter()) {
            *glyph = cell.ascii_character;
        }
        glyphs
    }

    /// Last position passed to [`TextBuffer::move_cursor`].
    pub fn hardware_cursor(&self) -> (usize, usize) {
        self.cursor
    }
}

impl<const W: usize, const H: usize> Default for MemoryBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> TextBuffer for MemoryBuffer<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        self.cells[row][col] = cell;
    }

    fn read_cell(&self, row: usize, col: usize) -> ScreenChar {
        self.cells[row][col]
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }
}

/// Replays a fixed list of raw scancodes.
#[derive(Debug, Clone)]
pub struct ScriptedScancodes<'a> {
    codes: &'a [u8],
    next: usize,
}

impl<'a> ScriptedScancodes<'a> {
    /// A source that yields `codes` in order.
    pub fn new(codes: &'a [u8]) -> Self {
        ScriptedScancodes { codes, next: 0 }
    }

    /// Codes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.codes.len() - self.next
    }
}

impl ScancodeSource for ScriptedScancodes<'_> {
    fn wait_scancode(&mut self) -> u8 {
        let code = *self
            .codes
            .get(self.next)
            .unwrap_or_else(|| panic!("scancode script exhausted after {} codes", self.next));
        self.next += 1;
        code
    }
}

/// Types ASCII text as make codes.
///
/// Characters that need shift are wrapped in a left shift make/break pair.
/// Bytes with no key on the layout panic when reached.
#[derive(Debug, Clone)]
pub struct TypedText<'a> {
    text: &'a [u8],
    next: usize,
    pending: [u8; 3],
    pending_len: usize,
}

impl<'a> TypedText<'a> {
    /// A source that types `text`.
    pub fn new(text: &'a str) -> Self {
        TypedText {
            text: text.as_bytes(),
            next: 0,
            pending: [0; 3],
            pending_len: 0,
        }
    }

    /// True once every character has been typed.
    pub fn is_done(&self) -> bool {
        self.next == self.text.len() && self.pending_len == 0
    }

    fn queue_next_char(&mut self) {
        let byte = *self
            .text
            .get(self.next)
            .unwrap_or_else(|| panic!("typed text exhausted after {} bytes", self.next));
        self.next += 1;

        // Stored reversed, popped from the end.
        (self.pending, self.pending_len) = match make_code_for(byte) {
            Some((code, false)) => ([code, 0, 0], 1),
            Some((code, true)) => ([LEFT_SHIFT_BREAK, code, LEFT_SHIFT_MAKE], 3),
            None => panic!("no key types {:#04x}", byte),
        };
    }
}

impl ScancodeSource for TypedText<'_> {
    fn wait_scancode(&mut self) -> u8 {
        if self.pending_len == 0 {
            self.queue_next_char();
        }
        self.pending_len -= 1;
        self.pending[self.pending_len]
    }
}

/// Finds the key for `byte`, and whether shift must be held for it.
fn make_code_for(byte: u8) -> Option<(u8, bool)> {
    if byte == 0 {
        return None;
    }
    if let Some(code) = PRIMARY.iter().position(|&b| b == byte) {
        return Some((code as u8, false));
    }
    SHIFTED_TOP_ROW
        .iter()
        .position(|&b| b == byte)
        .map(|offset| (TOP_ROW_FIRST + offset as u8, true))
}

/// RTC registers and power switch held in memory.
#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    /// Raw clock registers, indexed by register number.
    pub registers: [u8; 16],
    /// Set by [`PowerControl::power_off`].
    pub powered_off: bool,
}

impl FakePlatform {
    /// A platform whose clock reads `hours:minutes`, stored as BCD.
    pub fn at(hours: u8, minutes: u8) -> Self {
        let mut platform = FakePlatform::default();
        platform.registers[usize::from(HOURS_REGISTER)] = to_bcd(hours);
        platform.registers[usize::from(MINUTES_REGISTER)] = to_bcd(minutes);
        platform
    }
}

impl RealTimeClock for FakePlatform {
    fn read_register(&mut self, index: u8) -> u8 {
        self.registers
            .get(usize::from(index))
            .copied()
            .unwrap_or(0)
    }
}

impl PowerControl for FakePlatform {
    fn power_off(&mut self) {
        self.powered_off = true;
    }
}

fn to_bcd(value: u8) -> u8 {
    (value / 10) << 4 | value % 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Keyboard;

    #[test]
    fn test_typed_text_round_trips_through_keyboard() {
        let mut keyboard = Keyboard::new(TypedText::new("echo 1+1 = 2!\n"));
        let mut typed = Vec::new();
        while !keyboard.source().is_done() {
            typed.push(keyboard.next_char());
        }
        assert_eq!(typed, b"echo 1+1 = 2!\n");
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_source_panics_when_empty() {
        let mut source = ScriptedScancodes::new(&[0x1E]);
        assert_eq!(source.remaining(), 1);
        source.wait_scancode();
        source.wait_scancode();
    }

    #[test]
    fn test_fake_platform_clock_is_bcd() {
        let mut platform = FakePlatform::at(23, 59);
        assert_eq!(platform.read_register(HOURS_REGISTER), 0x23);
        assert_eq!(platform.read_register(MINUTES_REGISTER), 0x59);
    }
}
