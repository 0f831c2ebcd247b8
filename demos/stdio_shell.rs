//! Shell on the process's standard streams.
//!
//! ```text
//! cargo run --example stdio_shell --features std
//! ```
//!
//! The terminal stays in cooked mode, so lines are edited by the terminal
//! and reach the shell on Enter. Put the terminal in raw mode first
//! (`stty raw -echo`) to exercise the shell's own editing and history keys.

use core::cell::Cell;

use libshell::io::{StreamTransport, Transport};
use libshell::{CommandResult, Config, ParamValue, Shell, ShellError, text_buffer};

fn status<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    shell.println("System Status:");
    shell.println("  All systems operational");
    Ok(())
}

fn reboot<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    shell.println("Rebooting system...");
    shell.stop();
    Ok(())
}

fn main() -> Result<(), ShellError> {
    println!("libshell - standard stream example");
    println!("Type 'help' for available commands\n");

    let counter = Cell::new(0);
    let temperature = Cell::new(25.5f32);
    let name = text_buffer::<64>("MyDevice");
    let enabled = Cell::new(true);

    let config = Config {
        history_size: 20,
        ..Config::default()
    };
    let mut shell = Shell::new(StreamTransport::stdio(), config)?;

    shell.register_command("status", "Show system status", status)?;
    shell.register_command("reboot", "Reboot system", reboot)?;
    shell.register_parameter("counter", ParamValue::Int(&counter))?;
    shell.register_parameter("temperature", ParamValue::Float(&temperature))?;
    shell.register_parameter("name", ParamValue::Text(&name))?;
    shell.register_parameter("enabled", ParamValue::Bool(&enabled))?;

    shell.run()?;

    println!("\nShell exited.");
    Ok(())
}
