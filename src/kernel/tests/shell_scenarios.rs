//! End-to-end shell scenarios against in-memory hardware.

use lumen_common::{ColorCode, CommandSet, ScreenChar};
use lumen_kernel::config::ConsoleConfig;
use lumen_kernel::display::Screen;
use lumen_kernel::keyboard::Keyboard;
use lumen_kernel::terminal::{Shell, COMMANDS, MAX_LINE_LENGTH};
use lumen_kernel::testutil::{FakePlatform, MemoryBuffer, TypedText};

type Buffer = MemoryBuffer<80, 25>;
type TestShell<'a> = Shell<Buffer, TypedText<'a>, FakePlatform>;

fn shell_with(input: &str, config: ConsoleConfig) -> TestShell<'_> {
    let mut screen = Screen::new(Buffer::new(), &config);
    screen.initialize();
    Shell::new(
        screen,
        Keyboard::new(TypedText::new(input)),
        FakePlatform::at(14, 7),
        config,
    )
}

fn shell(input: &str) -> TestShell<'_> {
    shell_with(input, ConsoleConfig::new())
}

fn row(shell: &TestShell<'_>, row: usize) -> String {
    String::from_utf8_lossy(&shell.screen().buffer().line(row))
        .trim_end()
        .to_string()
}

fn rows(shell: &TestShell<'_>) -> Vec<String> {
    let mut rows: Vec<String> = (0..25).map(|r| row(shell, r)).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows
}

#[test]
fn clear_blanks_screen_and_homes_cursor() {
    let mut shell = shell("");
    shell.screen_mut().write_string("some\nearlier\noutput");
    shell.dispatch("clear");

    let blank = ScreenChar::blank(ColorCode::default());
    for r in 0..25 {
        for c in 0..80 {
            assert_eq!(shell.screen().buffer().cell(r, c), blank);
        }
    }
    assert_eq!(shell.screen().cursor(), (0, 0));
}

#[test]
fn echo_writes_text_and_newline() {
    let mut shell = shell("");
    shell.dispatch("echo hello");
    assert_eq!(rows(&shell), ["hello"]);
    assert_eq!(shell.screen().cursor(), (1, 0));
}

#[test]
fn echo_without_argument_writes_only_newline() {
    let mut shell = shell("");
    shell.dispatch("echo");
    assert!(rows(&shell).is_empty());
    assert_eq!(shell.screen().cursor(), (1, 0));
}

#[test]
fn echo_keeps_inner_spaces() {
    let mut shell = shell("");
    shell.dispatch("echo  two  spaces");
    assert_eq!(rows(&shell), [" two  spaces"]);
}

#[test]
fn unknown_command_reports_line_only() {
    let mut shell = shell("");
    shell.dispatch("bogus");
    assert_eq!(rows(&shell), ["Comando nao encontrado: bogus"]);
    assert_eq!(shell.screen().cursor(), (1, 0));
    assert_eq!(shell.screen().color(), ColorCode::default());
    assert!(!shell.platform().powered_off);
}

#[test]
fn near_miss_names_do_not_match() {
    let mut shell = shell("");
    shell.dispatch("clearX");
    shell.dispatch("echohello");
    assert_eq!(
        rows(&shell),
        [
            "Comando nao encontrado: clearX",
            "Comando nao encontrado: echohello"
        ]
    );
}

#[test]
fn help_lists_commands_in_table_order() {
    let mut shell = shell("help\n");
    shell.step();

    let mut expected = vec!["$ help".to_string(), "Comandos disponiveis:".to_string()];
    expected.extend(
        COMMANDS
            .iter()
            .map(|d| format!("{} - {}", d.name, d.description)),
    );
    assert_eq!(rows(&shell), expected);
}

#[test]
fn help_skips_disabled_commands() {
    let config =
        ConsoleConfig::new().with_commands(CommandSet::HELP | CommandSet::CLEAR | CommandSet::ECHO);
    let mut shell = shell_with("", config);
    shell.dispatch("help");
    assert_eq!(
        rows(&shell),
        [
            "Comandos disponiveis:",
            "help - Lista todos os comandos",
            "clear - Limpa a tela",
            "echo - Exibe uma mensagem",
        ]
    );
}

#[test]
fn calc_adds() {
    let mut shell = shell("calc\n12 + 7\n");
    shell.step();
    assert_eq!(
        rows(&shell),
        ["$ calc", "Expressao: 12 + 7", "Resultado: 19"]
    );
}

#[test]
fn calc_division_by_zero_is_zero() {
    let mut shell = shell("5 / 0\n");
    shell.dispatch("calc");
    assert_eq!(rows(&shell), ["Expressao: 5 / 0", "Resultado: 0"]);
}

#[test]
fn calc_negative_result_and_alias() {
    let mut shell = shell("3 - 10\n4x5\n");
    shell.dispatch("calc");
    shell.dispatch("calc");
    assert_eq!(
        rows(&shell),
        [
            "Expressao: 3 - 10",
            "Resultado: -7",
            "Expressao: 4x5",
            "Resultado: 20"
        ]
    );
}

#[test]
fn calc_accepts_keypad_input() {
    // Keypad 1, 2, +, 3, keypad enter.
    let script: [u8; 6] = [0x4F, 0x50, 0x4E, 0x51, 0xE0, 0x1C];
    let config = ConsoleConfig::new();
    let mut screen = Screen::new(Buffer::new(), &config);
    screen.initialize();
    let keyboard = Keyboard::new(lumen_kernel::testutil::ScriptedScancodes::new(&script));
    let mut shell = Shell::new(screen, keyboard, FakePlatform::default(), config);

    shell.dispatch("calc");
    let result = String::from_utf8_lossy(&shell.screen().buffer().line(1))
        .trim_end()
        .to_string();
    assert_eq!(result, "Resultado: 15");
}

#[test]
fn time_reads_rtc() {
    let mut shell = shell("");
    shell.dispatch("time");
    assert_eq!(rows(&shell), ["Hora: 14:07"]);
}

#[test]
fn shutdown_requests_power_off() {
    let mut shell = shell("");
    shell.dispatch("shutdown");
    assert!(shell.platform().powered_off);
    assert_eq!(rows(&shell), ["Desligando..."]);
}

#[test]
fn overlong_line_is_truncated_at_capacity() {
    let input = "a".repeat(MAX_LINE_LENGTH + 40) + "\n";
    let mut shell = shell(&input);
    shell.read_line();
    assert_eq!(shell.input().len(), MAX_LINE_LENGTH);
}

#[test]
fn backspace_after_wrap_keeps_screen_and_line_in_step() {
    let input = "a".repeat(78) + "\x08\n";
    let mut shell = shell(&input);
    shell.prompt();
    shell.read_line();

    assert_eq!(shell.input().len(), 77);
    let expected = String::from("$ ") + &"a".repeat(77);
    assert_eq!(row(&shell, 0), expected);
    assert_eq!(row(&shell, 1), "");
    assert_eq!(shell.screen().cursor(), (1, 0));
}

#[test]
fn wrapped_line_dispatches_what_is_shown() {
    // 7 + 80 characters spill 7 onto the second row; 9 backspaces climb back.
    let input = format!("echo {}{}yz\n", "x".repeat(80), "\x08".repeat(9));
    let mut shell = shell(&input);
    shell.step();

    let echoed = "x".repeat(71) + "yz";
    assert_eq!(row(&shell, 0), format!("$ echo {}", echoed));
    assert_eq!(row(&shell, 1), "");
    assert_eq!(row(&shell, 2), echoed);
}

#[test]
fn shifted_symbols_reach_the_command() {
    let mut shell = shell("echo hi!\n");
    shell.step();
    assert_eq!(rows(&shell), ["$ echo hi!", "hi!"]);
}

#[test]
fn status_bar_shows_clock_and_survives_scrolling() {
    let config = ConsoleConfig::new().with_status_bar(true);
    let input = "echo x\n".repeat(30);
    let mut shell = shell_with(&input, config);
    for _ in 0..30 {
        shell.step();
    }
    assert!(row(&shell, 24).contains("14:07"));
    assert_eq!(row(&shell, 21), "$ echo x");
    assert_eq!(row(&shell, 22), "x");
    assert_eq!(row(&shell, 23), "");
    assert_eq!(shell.screen().cursor(), (23, 0));
}
