//! Lumen Kernel
//!
//! A single-address-space text console for x86_64 PCs: a VGA text display,
//! a polled PS/2 keyboard and a small command shell, with no operating
//! system underneath.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `display`: character-grid screen with cursor, wrap, scroll and status row
//! - `keyboard`: scancode decoder and blocking character reader
//! - `terminal`: command table and shell loop
//! - `peripherals`: real-time clock and power-off accessors
//! - `arch`: platform-specific bindings (VGA, PS/2, CMOS, ACPI, serial)
//! - `boot`: boot banner and status messages
//! - `config`: build-time console configuration
//! - `testutil`: in-memory hardware doubles
//!
//! Everything above `arch` talks to hardware only through the `lumen-hal`
//! traits.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod config;
pub mod display;
pub mod keyboard;
#[cfg(target_arch = "x86_64")]
pub mod logger;
pub mod peripherals;
pub mod terminal;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Brings up the serial port and installs the logger. Called first thing
/// in the boot process.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        logger::init(config::ConsoleConfig::log_level());
    }
}
