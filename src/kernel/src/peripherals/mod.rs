//! One-shot accessors for ancillary hardware.
//!
//! - `rtc`: wall-clock reads for the status line and the `time` command
//! - [`power_off`]: the platform power-off request used by `shutdown`

pub mod rtc;

pub use rtc::ClockTime;

use lumen_hal::PowerControl;

/// Asks the platform to power down.
///
/// On hardware that honours the request this never returns; emulators
/// without the power-management device simply ignore it.
pub fn power_off<P: PowerControl + ?Sized>(power: &mut P) {
    log::info!("requesting platform power-off");
    power.power_off();
    log::warn!("power-off request was ignored by the platform");
}
