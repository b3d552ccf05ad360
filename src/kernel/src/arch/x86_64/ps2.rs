//! Polled PS/2 keyboard controller.

use lumen_hal::ScancodeSource;
use x86_64::instructions::port::PortReadOnly;

/// Controller data port.
const DATA_PORT: u16 = 0x60;
/// Controller status port.
const STATUS_PORT: u16 = 0x64;

/// Status bit: a byte is waiting in the output buffer.
const OUTPUT_FULL: u8 = 0x01;
/// Status bit: the waiting byte came from the auxiliary (mouse) port.
const AUX_DATA: u8 = 0x20;

/// Keyboard read by busy-polling the controller status register.
pub struct Ps2Keyboard {
    data: PortReadOnly<u8>,
    status: PortReadOnly<u8>,
}

impl Ps2Keyboard {
    /// Takes the PS/2 controller ports.
    ///
    /// # Safety
    ///
    /// Must run in ring 0 with interrupts for IRQ 1 not consuming the data
    /// port behind our back.
    pub const unsafe fn new() -> Self {
        Ps2Keyboard {
            data: PortReadOnly::new(DATA_PORT),
            status: PortReadOnly::new(STATUS_PORT),
        }
    }
}

impl ScancodeSource for Ps2Keyboard {
    fn wait_scancode(&mut self) -> u8 {
        loop {
            // SAFETY: reading the controller ports has no side effects beyond
            // popping the output buffer, which is what we want.
            unsafe {
                let status = self.status.read();
                if status & OUTPUT_FULL != 0 {
                    let byte = self.data.read();
                    if status & AUX_DATA == 0 {
                        return byte;
                    }
                }
            }
            core::hint::spin_loop();
        }
    }
}
