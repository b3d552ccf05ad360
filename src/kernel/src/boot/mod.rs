//! Boot logging with colored status indicators.
//!
//! Provides Linux-style boot messages with colored status brackets. Every
//! message is mirrored to the kernel log.

pub mod banner;

use lumen_common::Color;
use lumen_hal::TextBuffer;

use crate::display::Screen;

/// Boot status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log<B: TextBuffer>(screen: &mut Screen<B>, status: Status, message: &str) {
    match status {
        Status::Fail => log::error!("{}", message),
        Status::Warn => log::warn!("{}", message),
        Status::Ok | Status::Info => log::info!("{}", message),
    }
    print_status(screen, status);
    screen.put_char(b' ');
    screen.write_string(message);
    screen.put_char(b'\n');
}

/// Log an indented detail line (for sub-items).
///
/// Format: `       Detail text` (aligned with message after status)
pub fn log_detail<B: TextBuffer>(screen: &mut Screen<B>, message: &str) {
    log::info!("  {}", message);
    screen.write_string("       ");
    screen.write_string(message);
    screen.put_char(b'\n');
}

fn print_status<B: TextBuffer>(screen: &mut Screen<B>, status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    let previous = screen.color();
    screen.set_color(color, previous.background());
    screen.write_string(text);
    screen.set_color_code(previous);
}
