//! x86_64 architecture support.
//!
//! Binds the HAL traits to PC hardware: the VGA text buffer, the PS/2
//! controller, the CMOS clock, ACPI power-off and the COM1 serial port.

pub mod cmos;
pub mod power;
pub mod ps2;
pub mod serial;
pub mod vga;

pub use cmos::Cmos;
pub use power::AcpiPower;
pub use ps2::Ps2Keyboard;
pub use vga::VgaBuffer;

use lumen_hal::{PowerControl, RealTimeClock};

/// The PC platform devices the shell talks to directly.
pub struct Pc {
    cmos: Cmos,
    power: AcpiPower,
}

impl Pc {
    /// Takes the clock and power-management ports.
    ///
    /// # Safety
    ///
    /// See [`Cmos::new`] and [`AcpiPower::new`].
    pub const unsafe fn new() -> Self {
        Pc {
            cmos: Cmos::new(),
            power: AcpiPower::new(),
        }
    }
}

impl RealTimeClock for Pc {
    fn read_register(&mut self, index: u8) -> u8 {
        self.cmos.read_register(index)
    }
}

impl PowerControl for Pc {
    fn power_off(&mut self) {
        self.power.power_off();
    }
}

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
