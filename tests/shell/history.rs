use crate::mock::{MockTransport, plain_config, plain_shell};
use libshell::{Config, Shell};

#[test]
fn test_submitted_lines_are_recorded() {
    let mut shell = plain_shell();
    shell.input(b"help\rclear\r");
    assert!(shell.history().iter().eq(["help", "clear"]));
}

#[test]
fn test_repeated_line_recorded_once() {
    let mut shell = plain_shell();
    shell.input(b"help\rhelp\r");
    assert_eq!(shell.history().len(), 1);
}

#[test]
fn test_blank_line_not_recorded() {
    let mut shell = plain_shell();
    shell.input(b"\r\r");
    assert!(shell.history().is_empty());
}

#[test]
fn test_oldest_line_evicted() {
    let config = Config {
        history_size: 2,
        ..plain_config()
    };
    let mut shell = Shell::new(MockTransport::new(), config).unwrap();
    shell.input(b"a\rb\rc\r");
    assert!(shell.history().iter().eq(["b", "c"]));
}

#[test]
fn test_up_arrow_recalls_previous_line() {
    let mut shell = plain_shell();
    shell.input(b"get rate\r");
    shell.io_mut().clear_output();

    shell.input(b"\x1b[A");
    assert_eq!(shell.line().as_str(), "get rate");
    assert_eq!(shell.line().cursor(), shell.line().len());
    assert_eq!(shell.io().output(), "\r$ get rate");
}

#[test]
fn test_browsing_walks_back_and_forth() {
    let mut shell = plain_shell();
    shell.input(b"one\rtwo\rthree\r");

    shell.input(b"\x1b[A\x1b[A");
    assert_eq!(shell.line().as_str(), "two");
    shell.input(b"\x1b[A\x1b[A");
    assert_eq!(shell.line().as_str(), "one");

    shell.input(b"\x1b[B");
    assert_eq!(shell.line().as_str(), "two");
    shell.input(b"\x1b[B\x1b[B");
    assert_eq!(shell.line().as_str(), "");
    assert_eq!(shell.history().position(), 0);
}

#[test]
fn test_down_arrow_without_browsing_keeps_line() {
    let mut shell = plain_shell();
    shell.input(b"one\rdraft\x1b[B");
    assert_eq!(shell.line().as_str(), "draft");
}

#[test]
fn test_recalled_line_can_be_edited_and_run() {
    let mut shell = plain_shell();
    shell.input(b"frobnicate\r");
    shell.input(b"\x1b[A\x7f\x7f\x7f\x7f\x7f\x7f\x7f\x7f\x7f\x7f\x7fhelp\r");
    assert!(shell.history().iter().eq(["frobnicate", "help"]));
    assert!(shell.io().output().contains("Available commands:"));
}

#[test]
fn test_disabled_history_ignores_arrows() {
    let config = Config {
        history_size: 0,
        ..plain_config()
    };
    let mut shell = Shell::new(MockTransport::new(), config).unwrap();
    shell.input(b"help\r\x1b[A");
    assert!(shell.history().is_empty());
    assert!(shell.line().is_empty());
}

#[test]
fn test_unknown_command_still_recorded() {
    let mut shell = plain_shell();
    shell.input(b"frobnicate\r");

    assert!(shell.line().is_empty());
    assert!(shell.history().iter().eq(["frobnicate"]));
    assert!(shell.io().output().contains("Command not found: frobnicate\n"));
}

#[test]
fn test_execute_bypasses_history() {
    let mut shell = plain_shell();
    shell.execute("help").unwrap();
    assert!(shell.history().is_empty());
}
