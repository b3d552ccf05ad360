//! Terminal subsystem.
//!
//! Provides the line-oriented command shell.
//!
//! # Architecture
//!
//! - `shell`: prompt, line editing and the read/dispatch loop
//! - `commands`: the static command table and its handlers
//! - `line`: fixed-capacity input line
//! - `calc`: expression accumulator behind the `calc` command

pub mod calc;
pub mod commands;
pub mod line;
pub mod shell;

pub use commands::{dispatch, Command, CommandDescriptor, COMMANDS};
pub use line::{LineBuffer, MAX_LINE_LENGTH};
pub use shell::Shell;
