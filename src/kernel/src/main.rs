//! Lumen Kernel Entry Point
//!
//! Brings up the console and hands control to the shell. Only meaningful
//! on a bare-metal target; built for a hosted target it just says so.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use lumen_kernel::arch::x86_64::{self, Pc, Ps2Keyboard, VgaBuffer};
    use lumen_kernel::boot::{self, Status};
    use lumen_kernel::config::ConsoleConfig;
    use lumen_kernel::display::Screen;
    use lumen_kernel::keyboard::Keyboard;
    use lumen_kernel::terminal::Shell;

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        lumen_kernel::init();
        let config = ConsoleConfig::from_features();

        // SAFETY: the bootloader identity-maps the VGA buffer and this is
        // the only handle taken outside the panic path.
        let mut screen = Screen::new(unsafe { VgaBuffer::new() }, &config);
        screen.initialize();
        boot::banner::print_banner(&mut screen);

        boot::log(&mut screen, Status::Ok, "Serial log on COM1");
        boot::log(&mut screen, Status::Ok, "VGA text mode 80x25");

        // SAFETY: interrupts are never enabled, so polling owns the controller.
        let keyboard = Keyboard::new(unsafe { Ps2Keyboard::new() });
        boot::log(&mut screen, Status::Ok, "PS/2 keyboard (polling)");
        boot::log_detail(&mut screen, "US layout, shift and numeric keypad");

        // SAFETY: single thread of control in ring 0.
        let platform = unsafe { Pc::new() };
        if screen.has_status_bar() {
            boot::log(&mut screen, Status::Info, "Status bar enabled");
        }
        boot::log(&mut screen, Status::Ok, "Boot complete!");
        screen.put_char(b'\n');

        let mut shell = Shell::new(screen, keyboard, platform, config);
        shell.run()
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        x86_64::serial::emergency_print(format_args!("KERNEL PANIC: {}\n", info));
        x86_64::vga::show_panic(info);
        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("lumen-kernel runs on bare metal; build it with `cargo bootimage`");
    std::process::exit(1);
}
