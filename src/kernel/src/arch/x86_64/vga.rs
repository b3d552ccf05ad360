//! VGA text mode buffer for x86_64.
//!
//! Exposes the 80x25 text buffer at 0xB8000 as a [`TextBuffer`] and drives
//! the blinking hardware cursor through the CRT controller.

use core::panic::PanicInfo;
use core::ptr;

use lumen_common::{Color, ScreenChar};
use lumen_hal::TextBuffer;
use x86_64::instructions::port::Port;

use crate::config::ConsoleConfig;
use crate::display::Screen;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// Number of rows in VGA text mode.
const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
const BUFFER_WIDTH: usize = 80;

/// CRT controller index and data ports.
const CRTC_INDEX: u16 = 0x3D4;
const CRTC_DATA: u16 = 0x3D5;

/// CRT controller cursor location registers.
const CURSOR_LOCATION_HIGH: u8 = 0x0E;
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// Handle on the VGA text buffer.
pub struct VgaBuffer {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The bootloader identity-maps the VGA buffer at 0xB8000.
    buffer: *mut Buffer,
    crtc_index: Port<u8>,
    crtc_data: Port<u8>,
}

impl VgaBuffer {
    /// Takes the VGA text buffer.
    ///
    /// # Safety
    ///
    /// The caller must be running on x86 hardware (or QEMU) with 0xB8000
    /// mapped, in ring 0, and must not let two handles write concurrently.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
            crtc_index: Port::new(CRTC_INDEX),
            crtc_data: Port::new(CRTC_DATA),
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn width(&self) -> usize {
        BUFFER_WIDTH
    }

    fn height(&self) -> usize {
        BUFFER_HEIGHT
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        // SAFETY: Screen only passes row < BUFFER_HEIGHT and col < BUFFER_WIDTH.
        // Using volatile write because the VGA buffer is memory-mapped I/O that
        // may be read by hardware at any time.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).chars[row][col], cell);
        }
    }

    fn read_cell(&self, row: usize, col: usize) -> ScreenChar {
        // SAFETY: indices are in range as for write_cell.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[row][col]) }
    }

    fn move_cursor(&mut self, row: usize, col: usize) {
        let position = (row * BUFFER_WIDTH + col) as u16;
        // SAFETY: 0x3D4/0x3D5 are the standard CRTC ports; the cursor location
        // registers only affect where the hardware cursor blinks.
        unsafe {
            self.crtc_index.write(CURSOR_LOCATION_LOW);
            self.crtc_data.write((position & 0xFF) as u8);
            self.crtc_index.write(CURSOR_LOCATION_HIGH);
            self.crtc_data.write((position >> 8) as u8);
        }
    }
}

/// Paints a panic report over the whole screen.
///
/// Used from the panic handler, after the shell that owned the display is
/// gone for good.
pub fn show_panic(info: &PanicInfo) {
    use core::fmt::Write;

    // SAFETY: the panicking context is the only code still running.
    let buffer = unsafe { VgaBuffer::new() };
    let mut screen = Screen::new(buffer, &ConsoleConfig::new());
    screen.set_color(Color::White, Color::Red);
    screen.clear();
    let _ = writeln!(screen, "!!! KERNEL PANIC !!!\n\n{}", info);
}
