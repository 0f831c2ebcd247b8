//! Byte-level input processing
//!
//! Every byte from the terminal goes through [`Shell::process_byte`]. Plain
//! bytes edit the line; control bytes and `ESC [` sequences move the cursor,
//! recall history or submit the line. Multi-byte sequences are decoded with
//! a small state machine so bytes may arrive split across reads:
//!
//! ```text
//! Normal ──ESC──▶ Escape ──'['──▶ Csi ──'3'──▶ CsiDelete
//!   ▲               │              │               │
//!   └────other──────┴──A/B/C/D/H/F/other───────────┴──any
//! ```

use core::fmt::{self, Write};
use core::mem;

use super::{Shell, report};
use super::error::CommandResult;
use crate::io::{Transport, TransportWriter};
use crate::vt100::Vt100;

/// Ctrl-C: abandon the current line.
pub const KEY_CTRL_C: u8 = 0x03;
/// Ctrl-H: backspace on some terminals.
pub const KEY_CTRL_H: u8 = 0x08;
/// Tab.
pub const KEY_TAB: u8 = 0x09;
/// Line feed, accepted as Enter.
pub const KEY_LF: u8 = 0x0A;
/// Ctrl-L: clear the screen.
pub const KEY_CTRL_L: u8 = 0x0C;
/// Carriage return (Enter).
pub const KEY_ENTER: u8 = 0x0D;
/// Escape, the first byte of a control sequence.
pub const KEY_ESC: u8 = 0x1B;
/// DEL, sent by the backspace key on most terminals.
pub const KEY_BACKSPACE: u8 = 0x7F;

/// Escape sequence decoder state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeState {
    /// Not in a sequence
    #[default]
    Normal,
    /// Got `ESC`
    Escape,
    /// Got `ESC [`
    Csi,
    /// Got `ESC [ 3`, waiting for `~`
    CsiDelete,
}

impl<T: Transport, C> Shell<'_, T, C> {
    /// Feed a chunk of input.
    ///
    /// Results of commands dispatched along the way are discarded; use
    /// [`process_byte`](Shell::process_byte) to observe them.
    pub fn input(&mut self, data: &[u8]) {
        for &byte in data {
            let _ = self.process_byte(byte);
        }
    }

    /// Process one input byte.
    ///
    /// Returns `Some` with the command's result when the byte submitted a
    /// non-empty line, `None` otherwise.
    pub fn process_byte(&mut self, byte: u8) -> Option<CommandResult> {
        match self.escape {
            EscapeState::Normal => return self.process_normal(byte),
            EscapeState::Escape => {
                self.escape = if byte == b'[' {
                    EscapeState::Csi
                } else {
                    EscapeState::Normal
                };
            }
            EscapeState::Csi => self.process_csi(byte),
            EscapeState::CsiDelete => {
                self.escape = EscapeState::Normal;
                if byte == b'~' && self.line.delete() {
                    self.redraw_line();
                }
            }
        }
        None
    }

    fn process_normal(&mut self, byte: u8) -> Option<CommandResult> {
        match byte {
            KEY_CTRL_C => {
                self.println("^C");
                self.line.clear();
                self.print_prompt();
            }
            KEY_CTRL_L => {
                report(self.vt100().clear_screen());
                self.print_prompt();
                let Self { io, line, .. } = &mut *self;
                report(TransportWriter::new(io).write_str(line.as_str()));
            }
            KEY_ENTER | KEY_LF => {
                self.println("");
                let mut result = None;
                if !self.line.is_empty() {
                    let line = mem::take(&mut self.line);
                    if let Err(_err) = self.history.commit(line.as_str()) {
                        warn!("shell: line not recorded in history: {}", _err);
                    }
                    result = Some(self.execute(line.as_str()));
                }
                self.print_prompt();
                return result;
            }
            KEY_BACKSPACE | KEY_CTRL_H => {
                if self.line.backspace() {
                    self.redraw_line();
                }
            }
            KEY_TAB => self.bell(),
            KEY_ESC => self.escape = EscapeState::Escape,
            0x20..=0x7E => {
                if self.line.insert(byte) {
                    self.redraw_line();
                }
            }
            _ => trace!("shell: ignored byte {=u8:#x}", byte),
        }
        None
    }

    fn process_csi(&mut self, byte: u8) {
        self.escape = EscapeState::Normal;
        let prompt_len = self.config.prompt.len();

        match byte {
            b'A' => {
                if let Some(entry) = self.history.browse_older() {
                    self.line.set(entry);
                    self.redraw_line();
                }
            }
            b'B' => {
                if let Some(entry) = self.history.browse_newer() {
                    self.line.set(entry);
                    self.redraw_line();
                }
            }
            b'C' => {
                if self.line.move_right() {
                    report(self.vt100().cursor_right(1));
                }
            }
            b'D' => {
                if self.line.move_left() {
                    report(self.vt100().cursor_left(1));
                }
            }
            b'H' => {
                self.line.home();
                report(self.vt100().cursor_to_column(prompt_len));
            }
            b'F' => {
                self.line.end();
                let column = prompt_len + self.line.len();
                report(self.vt100().cursor_to_column(column));
            }
            b'3' => self.escape = EscapeState::CsiDelete,
            _ => {}
        }
    }

    /// Repaint the prompt and line, then park the terminal cursor over the
    /// edit position. The prompt is drawn without colour.
    fn redraw_line(&mut self) {
        let result = self.try_redraw_line();
        report(result);
    }

    fn try_redraw_line(&mut self) -> fmt::Result {
        let prompt = self.config.prompt;
        let column = prompt.len() + self.line.cursor();
        let enabled = self.config.vt100_enabled;
        let Self { io, line, .. } = &mut *self;

        let mut vt = Vt100::new(TransportWriter::new(io), enabled);
        vt.write_char('\r')?;
        vt.clear_line()?;
        vt.write_str(prompt)?;
        vt.write_str(line.as_str())?;
        vt.cursor_to_column(column)
    }
}
