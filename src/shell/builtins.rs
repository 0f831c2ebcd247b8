//! Commands every shell starts with.

use core::fmt::{self, Write};

use super::{Shell, report};
use super::error::{CommandResult, ShellError};
use crate::io::{Transport, TransportWriter};

/// `help`: list every reachable command with its help text.
///
/// Shadowed registrations are not listed: each name appears once, at the
/// position of its newest registration. A command with empty help text
/// prints its name alone.
pub(super) fn help<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    let Shell { io, commands, .. } = shell;
    let mut out = TransportWriter::new(io);
    report(write_help(&mut out, commands.visible().map(|c| (c.name, c.help))));
    Ok(())
}

fn write_help<'c>(
    out: &mut impl Write,
    commands: impl Iterator<Item = (&'c str, &'c str)>,
) -> fmt::Result {
    writeln!(out, "Available commands:")?;
    for (name, help) in commands {
        if help.is_empty() {
            writeln!(out, "  {}", name)?;
        } else {
            writeln!(out, "  {} - {}", name, help)?;
        }
    }
    Ok(())
}

/// `clear`, `cls`: blank the screen and home the cursor.
pub(super) fn clear<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    let mut vt = shell.vt100();
    let result = vt.clear_screen().and_then(|()| vt.cursor_home());
    report(result);
    Ok(())
}

/// `get <name>`: print a parameter as `<name> = <value>`.
pub(super) fn get<T: Transport, C>(shell: &mut Shell<'_, T, C>, args: &[&str]) -> CommandResult {
    let Some(&name) = args.get(1) else {
        shell.println("Usage: get <parameter>");
        return Err(ShellError::Usage);
    };
    let Some(param) = shell.parameters.find(name).copied() else {
        return not_found(shell, name);
    };

    report(writeln!(shell.writer(), "{} = {}", name, param.value));
    Ok(())
}

/// `set <name> <value>`: convert and store, then echo the value as typed.
pub(super) fn set<T: Transport, C>(shell: &mut Shell<'_, T, C>, args: &[&str]) -> CommandResult {
    let (Some(&name), Some(&value)) = (args.get(1), args.get(2)) else {
        shell.println("Usage: set <parameter> <value>");
        return Err(ShellError::Usage);
    };
    let Some(param) = shell.parameters.find(name).copied() else {
        return not_found(shell, name);
    };

    param.value.parse_and_store(value);
    debug!("shell: parameter stored");

    report(writeln!(shell.writer(), "Set {} = {}", name, value));
    Ok(())
}

fn not_found<T: Transport, C>(shell: &mut Shell<'_, T, C>, name: &str) -> CommandResult {
    report(writeln!(shell.writer(), "Parameter not found: {}", name));
    Err(ShellError::ParameterNotFound)
}
