//! Command-line shell with input handling.
//!
//! The shell cycles through three states forever:
//!
//! 1. prompt: refresh the status row (if any) and print the prompt;
//! 2. read: collect a line from the keyboard, echoing as it goes;
//! 3. dispatch: hand a non-empty line to the command table.
//!
//! Only `shutdown` ends the cycle, and it does so by switching the machine
//! off rather than by returning.

use lumen_hal::{PowerControl, RealTimeClock, ScancodeSource, TextBuffer};

use super::commands;
use super::line::LineBuffer;
use crate::config::ConsoleConfig;
use crate::display::Screen;
use crate::keyboard::Keyboard;
use crate::peripherals::ClockTime;

/// Backspace as produced by the keyboard decoder.
const BACKSPACE: u8 = 0x08;

/// The console: display, keyboard, platform and the line being edited.
pub struct Shell<B, S, P>
where
    B: TextBuffer,
    S: ScancodeSource,
    P: RealTimeClock + PowerControl,
{
    screen: Screen<B>,
    keyboard: Keyboard<S>,
    platform: P,
    line: LineBuffer,
    config: ConsoleConfig,
}

impl<B, S, P> Shell<B, S, P>
where
    B: TextBuffer,
    S: ScancodeSource,
    P: RealTimeClock + PowerControl,
{
    /// Assembles a shell. The screen should already be initialized.
    pub fn new(
        screen: Screen<B>,
        keyboard: Keyboard<S>,
        platform: P,
        config: ConsoleConfig,
    ) -> Self {
        Shell {
            screen,
            keyboard,
            platform,
            line: LineBuffer::new(),
            config,
        }
    }

    /// Runs the shell forever.
    pub fn run(&mut self) -> ! {
        log::info!("shell started");
        loop {
            self.step();
        }
    }

    /// One prompt, read, dispatch cycle.
    pub fn step(&mut self) {
        self.prompt();
        self.read_line();
        if !self.line.is_empty() {
            commands::dispatch(
                self.line.as_str(),
                &mut self.screen,
                &mut self.keyboard,
                &mut self.platform,
                self.config.commands,
            );
        }
        self.line.clear();
    }

    /// Display the shell prompt.
    pub fn prompt(&mut self) {
        if self.screen.has_status_bar() {
            self.refresh_status();
        }
        self.screen.write_string(self.config.prompt);
    }

    /// Redraws the status row with the current time.
    pub fn refresh_status(&mut self) {
        let time = ClockTime::read(&mut self.platform);
        self.screen.write_status_fmt(format_args!(
            " Lumen v{} | {} | 'help' lista os comandos",
            env!("CARGO_PKG_VERSION"),
            time
        ));
    }

    /// Reads keys into the line buffer until enter.
    ///
    /// Printable characters are echoed while there is room; once the buffer
    /// is full they are dropped. Backspace removes the last character. Other
    /// keys are ignored.
    pub fn read_line(&mut self) {
        loop {
            match self.keyboard.next_char() {
                b'\n' => {
                    self.screen.put_char(b'\n');
                    return;
                }
                BACKSPACE => {
                    if self.line.pop().is_some() {
                        self.erase_echoed();
                    }
                }
                byte @ 0x20..=0x7e => {
                    if self.line.push(byte).is_ok() {
                        self.screen.put_char(byte);
                    }
                }
                _ => {}
            }
        }
    }

    /// Erases the last echoed character.
    ///
    /// Echo wraps eagerly, so a cursor at column 0 means the character sits
    /// in the last column of the previous row.
    fn erase_echoed(&mut self) {
        let (row, col) = self.screen.cursor();
        if col > 0 {
            self.screen.backspace();
            return;
        }
        if row == 0 {
            return;
        }
        let last = self.screen.width() - 1;
        if self.screen.set_cursor(row - 1, last).is_ok() {
            // Blanking the last column wraps straight back to `row`.
            self.screen.put_char(b' ');
            let _ = self.screen.set_cursor(row - 1, last);
        }
    }

    /// Runs `line` through the command table.
    pub fn dispatch(&mut self, line: &str) {
        commands::dispatch(
            line,
            &mut self.screen,
            &mut self.keyboard,
            &mut self.platform,
            self.config.commands,
        );
    }

    /// Get the current input buffer.
    pub fn input(&self) -> &str {
        self.line.as_str()
    }

    /// The display surface.
    pub fn screen(&self) -> &Screen<B> {
        &self.screen
    }

    /// The display surface, mutably.
    pub fn screen_mut(&mut self) -> &mut Screen<B> {
        &mut self.screen
    }

    /// The platform handle.
    pub fn platform(&self) -> &P {
        &self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FakePlatform, MemoryBuffer, TypedText};
    use lumen_common::CommandSet;

    type TestShell<'a> = Shell<MemoryBuffer<40, 6>, TypedText<'a>, FakePlatform>;

    fn shell(input: &str, config: ConsoleConfig) -> TestShell<'_> {
        let mut screen = Screen::new(MemoryBuffer::new(), &config);
        screen.initialize();
        Shell::new(
            screen,
            Keyboard::new(TypedText::new(input)),
            FakePlatform::at(9, 30),
            config,
        )
    }

    fn row(shell: &TestShell<'_>, row: usize) -> String {
        String::from_utf8_lossy(&shell.screen().buffer().line(row))
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_read_line_echoes_and_edits() {
        let mut shell = shell("ecx\x08ho\n", ConsoleConfig::new());
        shell.read_line();
        assert_eq!(shell.input(), "echo");
        assert_eq!(row(&shell, 0), "echo");
        assert_eq!(shell.screen().cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_on_empty_line_keeps_prompt() {
        let mut shell = shell("\x08\x08a\n", ConsoleConfig::new());
        shell.prompt();
        shell.read_line();
        assert_eq!(shell.input(), "a");
        assert_eq!(row(&shell, 0), "$ a");
    }

    #[test]
    fn test_backspace_steps_back_over_wrapped_echo() {
        // "$ " plus 38 characters fills the 40-column row exactly.
        let input = "a".repeat(38) + "\x08\x08b\n";
        let mut shell = shell(&input, ConsoleConfig::new());
        shell.prompt();
        shell.read_line();
        let expected = String::from("$ ") + &"a".repeat(36) + "b";
        assert_eq!(row(&shell, 0), expected);
        assert_eq!(row(&shell, 1), "");
        assert_eq!(shell.input().len(), 37);
    }

    #[test]
    fn test_tab_is_dropped() {
        let mut shell = shell("a\tb\n", ConsoleConfig::new());
        shell.read_line();
        assert_eq!(shell.input(), "ab");
    }

    #[test]
    fn test_step_dispatches_and_clears_line() {
        let mut shell = shell("echo hi\n", ConsoleConfig::new());
        shell.step();
        assert_eq!(row(&shell, 0), "$ echo hi");
        assert_eq!(row(&shell, 1), "hi");
        assert_eq!(shell.input(), "");
    }

    #[test]
    fn test_empty_line_only_reprompts() {
        let mut shell = shell("\n\n", ConsoleConfig::new());
        shell.step();
        shell.step();
        assert_eq!(row(&shell, 0), "$");
        assert_eq!(row(&shell, 1), "$");
        assert_eq!(row(&shell, 2), "");
    }

    #[test]
    fn test_prompt_refreshes_status_row() {
        let config = ConsoleConfig::new().with_status_bar(true);
        let mut shell = shell("", config);
        shell.prompt();
        assert!(row(&shell, 5).contains("09:30"));
        assert_eq!(row(&shell, 0), "$");
    }

    #[test]
    fn test_custom_prompt() {
        let mut shell = shell("", ConsoleConfig::new().with_prompt("lumen> "));
        shell.prompt();
        assert_eq!(row(&shell, 0), "lumen>");
    }

    #[test]
    fn test_disabled_command_is_not_found() {
        let config = ConsoleConfig::new().with_commands(CommandSet::HELP);
        let mut shell = shell("", config);
        shell.dispatch("echo hi");
        assert_eq!(row(&shell, 0), "Comando nao encontrado: echo hi");
    }
}
