//! Boot banner and branding.

use lumen_common::Color;
use lumen_hal::TextBuffer;

use crate::display::Screen;

/// Print the Lumen boot banner.
pub fn print_banner<B: TextBuffer>(screen: &mut Screen<B>) {
    let previous = screen.color();
    screen.set_color(Color::Cyan, previous.background());
    screen.write_string("  _\n");
    screen.write_string(" | |   _   _ _ __ ___   ___ _ __\n");
    screen.write_string(" | |  | | | | '_ ` _ \\ / _ \\ '_ \\\n");
    screen.write_string(" | |__| |_| | | | | | |  __/ | | |\n");
    screen.write_string(" |_____\\__,_|_| |_| |_|\\___|_| |_|\n");
    screen.put_char(b'\n');
    screen.set_color_code(previous);
    screen.write_string(concat!(" Lumen v", env!("CARGO_PKG_VERSION"), "\n"));
    screen.write_string(" Digite 'help' para ver os comandos\n\n");
}
