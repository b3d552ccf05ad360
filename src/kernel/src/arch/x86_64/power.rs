//! ACPI power-off.

use lumen_hal::PowerControl;
use x86_64::instructions::port::PortWriteOnly;

/// QEMU's ACPI PM1a control port.
const PM1A_CONTROL_PORT: u16 = 0x604;
/// SLP_EN with the soft-off sleep type.
const SOFT_OFF: u16 = 0x2000;

/// The PM1a control register.
pub struct AcpiPower {
    port: PortWriteOnly<u16>,
}

impl AcpiPower {
    /// Takes the PM1a control port.
    ///
    /// # Safety
    ///
    /// Must run in ring 0.
    pub const unsafe fn new() -> Self {
        AcpiPower {
            port: PortWriteOnly::new(PM1A_CONTROL_PORT),
        }
    }
}

impl PowerControl for AcpiPower {
    fn power_off(&mut self) {
        // SAFETY: writing SOFT_OFF asks the platform to power down; if the
        // platform has no such device the write is ignored.
        unsafe { self.port.write(SOFT_OFF) }
    }
}
