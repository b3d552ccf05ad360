//! CMOS real-time clock.

use lumen_hal::RealTimeClock;
use x86_64::instructions::port::{Port, PortWriteOnly};

/// CMOS register select port.
const INDEX_PORT: u16 = 0x70;
/// CMOS data port.
const DATA_PORT: u16 = 0x71;

/// Status register A.
const STATUS_A: u8 = 0x0A;
/// Status A bit: the clock is updating its registers.
const UPDATE_IN_PROGRESS: u8 = 0x80;
/// Polls before reading anyway.
const UPDATE_WAIT_LIMIT: u32 = 10_000;

/// The CMOS clock chip.
pub struct Cmos {
    index: PortWriteOnly<u8>,
    data: Port<u8>,
}

impl Cmos {
    /// Takes the CMOS ports.
    ///
    /// # Safety
    ///
    /// Must run in ring 0; nothing else may select CMOS registers concurrently.
    pub const unsafe fn new() -> Self {
        Cmos {
            index: PortWriteOnly::new(INDEX_PORT),
            data: Port::new(DATA_PORT),
        }
    }

    fn raw_read(&mut self, register: u8) -> u8 {
        // SAFETY: selecting a register and reading it back is the documented
        // CMOS access sequence.
        unsafe {
            self.index.write(register);
            self.data.read()
        }
    }

    /// Waits, up to a bound, for an in-progress update to finish so the
    /// registers are not read half-written.
    fn wait_for_update(&mut self) {
        for _ in 0..UPDATE_WAIT_LIMIT {
            if self.raw_read(STATUS_A) & UPDATE_IN_PROGRESS == 0 {
                return;
            }
            core::hint::spin_loop();
        }
        log::warn!("rtc update still in progress, reading anyway");
    }
}

impl RealTimeClock for Cmos {
    fn read_register(&mut self, index: u8) -> u8 {
        self.wait_for_update();
        self.raw_read(index)
    }
}
