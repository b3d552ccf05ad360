//! Real-time clock registers.

use core::fmt;

use lumen_hal::RealTimeClock;

/// Minutes register index.
pub const MINUTES_REGISTER: u8 = 0x02;
/// Hours register index.
pub const HOURS_REGISTER: u8 = 0x04;

/// Converts a packed binary-coded-decimal byte to binary.
pub const fn bcd_to_binary(value: u8) -> u8 {
    (value / 16) * 10 + (value & 0x0F)
}

/// Hour and minute read from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hours, 0-23.
    pub hours: u8,
    /// Minutes, 0-59.
    pub minutes: u8,
}

impl ClockTime {
    /// Reads the hour and minute registers.
    pub fn read<R: RealTimeClock + ?Sized>(rtc: &mut R) -> Self {
        let hours = bcd_to_binary(rtc.read_register(HOURS_REGISTER));
        let minutes = bcd_to_binary(rtc.read_register(MINUTES_REGISTER));
        ClockTime { hours, minutes }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
