//! VT100/ANSI output sequences.
//!
//! [`Vt100`] wraps any [`core::fmt::Write`] sink and emits the handful of
//! control sequences the shell needs. It keeps no state besides the
//! enabled flag: when VT100 output is disabled every operation is a no-op
//! except [`Vt100::bell`], which always writes its byte.

use core::fmt::{self, Write};

/// Foreground colour codes accepted by [`Vt100::set_color`].
pub mod color {
    /// Black foreground.
    pub const BLACK: u8 = 30;
    /// Red foreground.
    pub const RED: u8 = 31;
    /// Green foreground.
    pub const GREEN: u8 = 32;
    /// Yellow foreground.
    pub const YELLOW: u8 = 33;
    /// Blue foreground.
    pub const BLUE: u8 = 34;
    /// White foreground.
    pub const WHITE: u8 = 37;
    /// Blue background.
    pub const BG_BLUE: u8 = 44;
}

/// Escape sequence emitter over a text sink.
#[derive(Debug)]
pub struct Vt100<W> {
    out: W,
    enabled: bool,
}

impl<W: Write> Vt100<W> {
    /// Wrap `out`; `enabled` mirrors the session's VT100 capability flag.
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Whether escape sequences are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&mut self, seq: &str) -> fmt::Result {
        if self.enabled {
            self.out.write_str(seq)
        } else {
            Ok(())
        }
    }

    fn emit_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        if self.enabled {
            self.out.write_fmt(args)
        } else {
            Ok(())
        }
    }

    /// `ESC [ 2 J`
    pub fn clear_screen(&mut self) -> fmt::Result {
        self.emit("\x1b[2J")
    }

    /// `ESC [ 2 K`
    pub fn clear_line(&mut self) -> fmt::Result {
        self.emit("\x1b[2K")
    }

    /// `ESC [ H`
    pub fn cursor_home(&mut self) -> fmt::Result {
        self.emit("\x1b[H")
    }

    /// Move to zero-based `column` (`ESC [ column+1 G`).
    pub fn cursor_to_column(&mut self, column: usize) -> fmt::Result {
        self.emit_fmt(format_args!("\x1b[{}G", column + 1))
    }

    /// `ESC [ n D`
    pub fn cursor_left(&mut self, n: usize) -> fmt::Result {
        self.emit_fmt(format_args!("\x1b[{}D", n))
    }

    /// `ESC [ n C`
    pub fn cursor_right(&mut self, n: usize) -> fmt::Result {
        self.emit_fmt(format_args!("\x1b[{}C", n))
    }

    /// Select graphic rendition: `ESC [ fg ; bg m` or `ESC [ fg m`.
    pub fn set_color(&mut self, fg: u8, bg: Option<u8>) -> fmt::Result {
        match bg {
            Some(bg) => self.emit_fmt(format_args!("\x1b[{};{}m", fg, bg)),
            None => self.emit_fmt(format_args!("\x1b[{}m", fg)),
        }
    }

    /// `ESC [ 0 m`
    pub fn reset_color(&mut self) -> fmt::Result {
        self.emit("\x1b[0m")
    }

    /// Switch to (`ESC [ ? 1049 h`) or back from (`ESC [ ? 1049 l`) the
    /// alternate screen buffer.
    pub fn alternate_screen(&mut self, enter: bool) -> fmt::Result {
        self.emit(if enter { "\x1b[?1049h" } else { "\x1b[?1049l" })
    }

    /// Audible bell. Written even when VT100 output is disabled.
    pub fn bell(&mut self) -> fmt::Result {
        self.out.write_char('\x07')
    }
}

/// Plain text passes through untouched regardless of the enabled flag.
impl<W: Write> Write for Vt100<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}
