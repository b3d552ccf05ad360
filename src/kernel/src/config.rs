//! Console configuration.
//!
//! There is no filesystem to read settings from, so everything is decided at
//! build time. [`ConsoleConfig::from_features`] maps the crate's cargo
//! features onto a configuration; tests build their own with the `const`
//! builders.

use lumen_common::{Color, ColorCode, CommandSet};

/// Default shell prompt.
pub const DEFAULT_PROMPT: &str = "$ ";

/// Runtime-invariant console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Reserve the bottom row for a status line.
    pub status_bar: bool,
    /// Commands the dispatcher will recognise.
    pub commands: CommandSet,
    /// Prompt written before every input line.
    pub prompt: &'static str,
    /// Attribute used by `initialize`.
    pub default_color: ColorCode,
    /// Attribute of the status row.
    pub status_color: ColorCode,
}

impl ConsoleConfig {
    /// Plain console: no status row, every command enabled.
    pub const fn new() -> Self {
        ConsoleConfig {
            status_bar: false,
            commands: CommandSet::all(),
            prompt: DEFAULT_PROMPT,
            default_color: ColorCode::new(Color::White, Color::Black),
            status_color: ColorCode::new(Color::Black, Color::LightGray),
        }
    }

    /// Configuration selected by the enabled cargo features.
    pub fn from_features() -> Self {
        let mut commands = CommandSet::all();
        if !cfg!(feature = "calc") {
            commands.remove(CommandSet::CALC);
        }
        ConsoleConfig::new()
            .with_status_bar(cfg!(feature = "status-bar"))
            .with_commands(commands)
    }

    /// Enables or disables the status row.
    pub const fn with_status_bar(mut self, status_bar: bool) -> Self {
        self.status_bar = status_bar;
        self
    }

    /// Restricts the command table.
    pub const fn with_commands(mut self, commands: CommandSet) -> Self {
        self.commands = commands;
        self
    }

    /// Replaces the prompt string.
    pub const fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Replaces the default text attribute.
    pub const fn with_default_color(mut self, color: ColorCode) -> Self {
        self.default_color = color;
        self
    }

    /// Maximum log level for the serial logger.
    pub fn log_level() -> log::LevelFilter {
        if cfg!(feature = "verbose") {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new()
    }
}
