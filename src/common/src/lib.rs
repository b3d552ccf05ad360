//! Types shared between the Lumen HAL and kernel crates.
//!
//! Nothing in here touches hardware: the cell encoding used by text-mode
//! displays, the key modifier flags, the command selection flags and the
//! console error type.

#![no_std]
#![warn(missing_docs)]

pub mod cell;
pub mod error;
pub mod flags;

pub use cell::{Color, ColorCode, ScreenChar};
pub use error::ConsoleError;
pub use flags::{CommandSet, Modifiers};
