//! Built-in shell commands.
//!
//! The command table is a static, ordered list scanned linearly. A line
//! selects a command when its first space-delimited token equals the
//! command's name exactly; handlers get the whole line and pick out their
//! own arguments.

use core::fmt::Write;

use lumen_common::{Color, CommandSet};
use lumen_hal::{PowerControl, RealTimeClock, ScancodeSource, TextBuffer};

use super::calc::Calculator;
use crate::display::Screen;
use crate::keyboard::Keyboard;
use crate::peripherals::{self, ClockTime};

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List the enabled commands.
    Help,
    /// Clear the screen.
    Clear,
    /// Echo the rest of the line.
    Echo,
    /// Read and evaluate one arithmetic expression.
    Calc,
    /// Show the real-time clock.
    Time,
    /// Power the machine off.
    Shutdown,
}

impl Command {
    /// The configuration flag that enables this command.
    pub fn flag(self) -> CommandSet {
        match self {
            Command::Help => CommandSet::HELP,
            Command::Clear => CommandSet::CLEAR,
            Command::Echo => CommandSet::ECHO,
            Command::Calc => CommandSet::CALC,
            Command::Time => CommandSet::TIME,
            Command::Shutdown => CommandSet::SHUTDOWN,
        }
    }

    /// Runs the command for `line`.
    pub fn execute<B, S, P>(
        self,
        line: &str,
        screen: &mut Screen<B>,
        keyboard: &mut Keyboard<S>,
        platform: &mut P,
        enabled: CommandSet,
    ) where
        B: TextBuffer,
        S: ScancodeSource,
        P: RealTimeClock + PowerControl,
    {
        match self {
            Command::Help => cmd_help(screen, enabled),
            Command::Clear => screen.clear(),
            Command::Echo => cmd_echo(screen, line),
            Command::Calc => cmd_calc(screen, keyboard),
            Command::Time => {
                let time = ClockTime::read(platform);
                let _ = writeln!(screen, "Hora: {}", time);
            }
            Command::Shutdown => {
                screen.write_string("Desligando...\n");
                peripherals::power_off(platform);
            }
        }
    }
}

/// A row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Name typed by the user.
    pub name: &'static str,
    /// Handler.
    pub command: Command,
    /// One-line description shown by `help`.
    pub description: &'static str,
}

/// The command table, in `help` order.
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "help",
        command: Command::Help,
        description: "Lista todos os comandos",
    },
    CommandDescriptor {
        name: "clear",
        command: Command::Clear,
        description: "Limpa a tela",
    },
    CommandDescriptor {
        name: "echo",
        command: Command::Echo,
        description: "Exibe uma mensagem",
    },
    CommandDescriptor {
        name: "calc",
        command: Command::Calc,
        description: "Calculadora de inteiros",
    },
    CommandDescriptor {
        name: "time",
        command: Command::Time,
        description: "Mostra a hora do relogio",
    },
    CommandDescriptor {
        name: "shutdown",
        command: Command::Shutdown,
        description: "Desliga o sistema",
    },
];

/// Descriptors enabled by `set`, in table order.
pub fn enabled_commands(set: CommandSet) -> impl Iterator<Item = &'static CommandDescriptor> {
    COMMANDS
        .iter()
        .filter(move |descriptor| set.contains(descriptor.command.flag()))
}

/// The command token of `line`: everything before the first space.
pub fn command_token(line: &str) -> &str {
    line.split_once(' ').map_or(line, |(token, _)| token)
}

/// Finds the enabled descriptor named by the first token of `line`.
pub fn lookup(line: &str, set: CommandSet) -> Option<&'static CommandDescriptor> {
    let token = command_token(line);
    enabled_commands(set).find(|descriptor| descriptor.name == token)
}

/// Runs the command named by `line`, or reports that there is none.
pub fn dispatch<B, S, P>(
    line: &str,
    screen: &mut Screen<B>,
    keyboard: &mut Keyboard<S>,
    platform: &mut P,
    enabled: CommandSet,
) where
    B: TextBuffer,
    S: ScancodeSource,
    P: RealTimeClock + PowerControl,
{
    match lookup(line, enabled) {
        Some(descriptor) => {
            log::debug!("dispatching `{}`", descriptor.name);
            descriptor
                .command
                .execute(line, screen, keyboard, platform, enabled);
        }
        None => {
            log::warn!("unknown command: {}", line);
            let previous = screen.color();
            screen.set_color(Color::LightRed, previous.background());
            let _ = writeln!(screen, "Comando nao encontrado: {}", line);
            screen.set_color_code(previous);
        }
    }
}

/// Display help information.
fn cmd_help<B: TextBuffer>(screen: &mut Screen<B>, enabled: CommandSet) {
    screen.write_string("Comandos disponiveis:\n");
    for descriptor in enabled_commands(enabled) {
        let _ = writeln!(screen, "{} - {}", descriptor.name, descriptor.description);
    }
}

/// Write everything after the first space.
fn cmd_echo<B: TextBuffer>(screen: &mut Screen<B>, line: &str) {
    let text = line.split_once(' ').map_or("", |(_, rest)| rest);
    screen.write_string(text);
    screen.put_char(b'\n');
}

/// Read one expression from the keyboard and print its value.
fn cmd_calc<B: TextBuffer, S: ScancodeSource>(screen: &mut Screen<B>, keyboard: &mut Keyboard<S>) {
    screen.write_string("Expressao: ");
    let mut calc = Calculator::new();
    loop {
        match keyboard.next_char() {
            b'\n' => {
                screen.put_char(b'\n');
                break;
            }
            byte @ 0x20..=0x7e => {
                screen.put_char(byte);
                calc.push(byte);
            }
            _ => {}
        }
    }
    let _ = writeln!(screen, "Resultado: {}", calc.result());
}
