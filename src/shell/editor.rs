//! `edit`: full-screen parameter table.
//!
//! Draws every registered parameter on the alternate screen and blocks on
//! the transport until `q` or `Q` arrives. The table is read-only; values
//! are changed with `set`.

use core::fmt::{self, Write};

use super::error::{CommandResult, ShellError};
use super::parameter::Parameter;
use super::{Shell, report};
use crate::io::{Transport, TransportWriter};
use crate::vt100::{Vt100, color};

const HEADER: &str = " Parameter Editor - Use arrow keys to navigate, Enter to edit, 'q' to quit ";
const COLUMNS: &str = "Parameter Name           Type      Value";
const RULE: &str = "--------------------------------------------------------";
const FOOTER: &str = "Press 'q' to return to shell";

pub(super) fn edit<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
    if shell.parameters.is_empty() {
        shell.println("No parameters to edit");
        return Err(ShellError::NoParameters);
    }

    let enabled = shell.config.vt100_enabled;
    let Shell { io, parameters, .. } = &mut *shell;
    let mut vt = Vt100::new(TransportWriter::new(io), enabled);
    report(render(&mut vt, parameters.iter()));
    shell.flush();

    let result = wait_for_quit(shell);

    report(shell.vt100().alternate_screen(false));
    result
}

fn render<'p, 'a: 'p, W: Write>(
    vt: &mut Vt100<W>,
    parameters: impl Iterator<Item = &'p Parameter<'a>>,
) -> fmt::Result {
    vt.alternate_screen(true)?;
    vt.clear_screen()?;

    vt.set_color(color::WHITE, Some(color::BG_BLUE))?;
    vt.write_str(HEADER)?;
    vt.reset_color()?;
    writeln!(vt)?;
    writeln!(vt)?;

    writeln!(vt, "{}", COLUMNS)?;
    writeln!(vt, "{}", RULE)?;
    for param in parameters {
        writeln!(vt, "{:<23} {:<9} {}", param.name, param.param_type(), param.value)?;
    }

    writeln!(vt)?;
    writeln!(vt, "{}", FOOTER)
}

/// Discard input until `q`/`Q`. A transport that ends or fails here ends the
/// session too.
fn wait_for_quit<T: Transport, C>(shell: &mut Shell<'_, T, C>) -> CommandResult {
    loop {
        match shell.io.read_byte() {
            Ok(Some(b'q' | b'Q')) => return Ok(()),
            Ok(Some(_)) => {}
            Ok(None) => {
                debug!("editor: end of input");
                shell.stop();
                return Ok(());
            }
            Err(_err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("editor: transport read failed: {}", defmt::Debug2Format(&_err));
                shell.stop();
                return Err(ShellError::Transport);
            }
        }
    }
}
