//! Lumen Hardware Abstraction Layer (HAL) traits.
//!
//! The console core only ever talks to hardware through these traits, so it
//! can run against the real VGA buffer and I/O ports or against in-memory
//! doubles.

#![no_std]

use lumen_common::ScreenChar;

/// Trait for a character-cell display buffer.
///
/// Rows and columns are always in range when called by the console; the
/// buffer does not need to check them again.
pub trait TextBuffer {
    /// Number of columns.
    fn width(&self) -> usize;
    /// Number of rows.
    fn height(&self) -> usize;
    /// Writes a single cell.
    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar);
    /// Reads a single cell back.
    fn read_cell(&self, row: usize, col: usize) -> ScreenChar;
    /// Moves the visible hardware cursor, if the display has one.
    fn move_cursor(&mut self, _row: usize, _col: usize) {}
}

/// Trait for the keyboard controller.
pub trait ScancodeSource {
    /// Blocks until a raw scancode is available and returns it.
    fn wait_scancode(&mut self) -> u8;
}

/// Trait for the real-time clock.
pub trait RealTimeClock {
    /// Reads a raw clock register.
    fn read_register(&mut self, index: u8) -> u8;
}

/// Trait for platform power control.
pub trait PowerControl {
    /// Requests power-off. Does not return on hardware that honours it.
    fn power_off(&mut self);
}
