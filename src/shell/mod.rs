//! Interactive line shell.
//!
//! A [`Shell`] is one session bound to one [`Transport`]. It reads bytes,
//! edits the current line in place, recalls history with the arrow keys and
//! dispatches completed lines to registered commands. Commands can read and
//! write typed runtime parameters that live in application memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Transport    │───▶│  InputProcessor │───▶│ CommandRegistry │
//! │   (read_byte)   │    │ (escape states) │    │   (dispatch)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │                       │
//!                                 ▼                       ▼
//!                        ┌─────────────────┐    ┌─────────────────┐
//!                        │   LineBuffer    │    │    Parameter    │
//!                        │  HistoryBuffer  │    │    Registry     │
//!                        └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use core::cell::Cell;
//! use libshell::io::Transport;
//! use libshell::{CommandResult, Config, ParamValue, Shell};
//!
//! # struct Uart { rx: &'static [u8], tx: heapless::Vec<u8, 1024> }
//! # impl Transport for Uart {
//! #     type Error = ();
//! #     fn read_byte(&mut self) -> Result<Option<u8>, ()> {
//! #         let (&first, rest) = match self.rx.split_first() { Some(s) => s, None => return Ok(None) };
//! #         self.rx = rest;
//! #         Ok(Some(first))
//! #     }
//! #     fn write_byte(&mut self, byte: u8) -> Result<(), ()> { self.tx.push(byte).map_err(|_| ()) }
//! # }
//! fn reboot<T: Transport, C>(shell: &mut Shell<'_, T, C>, _args: &[&str]) -> CommandResult {
//!     shell.println("rebooting");
//!     shell.stop();
//!     Ok(())
//! }
//!
//! let rate = Cell::new(100);
//! let uart = Uart { rx: b"set rate 250\rreboot\r", tx: heapless::Vec::new() };
//!
//! let config = Config { vt100_enabled: false, ..Config::default() };
//! let mut shell = Shell::new(uart, config).unwrap();
//! shell.register_command("reboot", "Restart the device", reboot).unwrap();
//! shell.register_parameter("rate", ParamValue::Int(&rate)).unwrap();
//!
//! shell.run().unwrap();
//! assert_eq!(rate.get(), 250);
//! ```

use core::fmt::{self, Write};

mod builtins;
pub mod command;
pub mod config;
mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod line;
pub mod parameter;


use crate::io::{Transport, TransportWriter};
use crate::vt100::{Vt100, color};

use command::{CommandFn, CommandRegistry, parse_line};
use config::Config;
use error::{CommandResult, ShellError};
use history::HistoryBuffer;
use input::EscapeState;
use line::LineBuffer;
use parameter::{Parameter, ParamValue, ParameterRegistry};

/// One interactive session.
///
/// `'a` bounds everything the shell borrows from the application: the
/// prompt, command names and help texts, and parameter storage. `T` is the
/// transport and `C` an application-defined context that command handlers
/// reach through [`context`](Shell::context) and
/// [`context_mut`](Shell::context_mut).
pub struct Shell<'a, T, C = ()> {
    io: T,
    config: Config<'a>,
    context: C,
    line: LineBuffer,
    history: HistoryBuffer,
    commands: CommandRegistry<'a, T, C>,
    parameters: ParameterRegistry<'a>,
    escape: EscapeState,
    running: bool,
}

impl<'a, T: Transport> Shell<'a, T> {
    /// Create a session without an application context.
    ///
    /// # Errors
    ///
    /// [`ShellError::OutOfMemory`] if `config.history_size` exceeds
    /// [`MAX_HISTORY_SIZE`](history::MAX_HISTORY_SIZE).
    pub fn new(io: T, config: Config<'a>) -> Result<Self, ShellError> {
        Self::with_context(io, config, ())
    }
}

impl<'a, T: Transport, C> Shell<'a, T, C> {
    /// Create a session carrying `context`.
    ///
    /// The built-in commands `help`, `clear`, `cls`, `get`, `set` and `edit`
    /// are registered here; registering a command of the same name later
    /// shadows the built-in.
    ///
    /// # Errors
    ///
    /// [`ShellError::OutOfMemory`] if `config.history_size` exceeds
    /// [`MAX_HISTORY_SIZE`](history::MAX_HISTORY_SIZE).
    pub fn with_context(io: T, config: Config<'a>, context: C) -> Result<Self, ShellError> {
        let mut shell = Self {
            io,
            config,
            context,
            line: LineBuffer::new(),
            history: HistoryBuffer::new(config.history_size)?,
            commands: CommandRegistry::new(),
            parameters: ParameterRegistry::new(),
            escape: EscapeState::Normal,
            running: false,
        };

        shell.register_command("help", "Display available commands", builtins::help)?;
        shell.register_command("clear", "Clear screen", builtins::clear)?;
        shell.register_command("cls", "Clear screen", builtins::clear)?;
        shell.register_command("get", "Get parameter value", builtins::get)?;
        shell.register_command("set", "Set parameter value", builtins::set)?;
        shell.register_command("edit", "Edit parameters in TUI mode", editor::edit)?;

        debug!(
            "shell: created, history {}, vt100 {}",
            config.history_size,
            config.vt100_enabled
        );
        Ok(shell)
    }

    /// Add a command. A name already in use is shadowed, not replaced.
    ///
    /// # Errors
    ///
    /// See [`CommandRegistry::register`].
    pub fn register_command(
        &mut self,
        name: &'a str,
        help: &'a str,
        handler: CommandFn<'a, T, C>,
    ) -> Result<(), ShellError> {
        self.commands.register(name, help, handler)
    }

    /// Remove the newest command called `name`.
    ///
    /// # Errors
    ///
    /// See [`CommandRegistry::unregister`].
    pub fn unregister_command(&mut self, name: &str) -> Result<(), ShellError> {
        self.commands.unregister(name)
    }

    /// The command table.
    pub fn commands(&self) -> &CommandRegistry<'a, T, C> {
        &self.commands
    }

    /// Expose application storage as a parameter.
    ///
    /// # Errors
    ///
    /// See [`ParameterRegistry::register`].
    pub fn register_parameter(
        &mut self,
        name: &'a str,
        value: ParamValue<'a>,
    ) -> Result<(), ShellError> {
        self.parameters.register(name, value)
    }

    /// Remove the newest parameter called `name`.
    ///
    /// # Errors
    ///
    /// See [`ParameterRegistry::unregister`].
    pub fn unregister_parameter(&mut self, name: &str) -> Result<(), ShellError> {
        self.parameters.unregister(name)
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter<'a>> {
        self.parameters.find(name)
    }

    /// The parameter table.
    pub fn parameters(&self) -> &ParameterRegistry<'a> {
        &self.parameters
    }

    /// The line being edited.
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// Command history.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Mutable command history, e.g. to preload or clear it.
    pub fn history_mut(&mut self) -> &mut HistoryBuffer {
        &mut self.history
    }

    /// Session configuration.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Mutable session configuration.
    ///
    /// Changing `history_size` here has no effect on the existing history.
    pub fn config_mut(&mut self) -> &mut Config<'a> {
        &mut self.config
    }

    /// The transport.
    pub fn io(&self) -> &T {
        &self.io
    }

    /// Mutable transport.
    pub fn io_mut(&mut self) -> &mut T {
        &mut self.io
    }

    /// Consume the session and hand back the transport.
    pub fn into_io(self) -> T {
        self.io
    }

    /// Application context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable application context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Whether [`run`](Shell::run) is looping.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Make [`run`](Shell::run) return after the current byte.
    ///
    /// Meant to be called from a command handler. The flag is only checked
    /// between bytes, so an idle session stays blocked in the transport read
    /// until the next byte arrives.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Serve the session until stopped or the transport ends.
    ///
    /// Prints the prompt, then reads, processes and flushes one byte at a
    /// time. Command failures are reported on the terminal and do not end
    /// the loop.
    ///
    /// # Errors
    ///
    /// [`ShellError::Transport`] if reading fails. End of stream is a clean
    /// `Ok(())`.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.running = true;
        debug!("shell: session started");
        self.print_prompt();
        self.flush();

        while self.running {
            match self.io.read_byte() {
                Ok(Some(byte)) => {
                    if let Some(Err(_err)) = self.process_byte(byte) {
                        debug!("shell: command failed: {}", _err);
                    }
                }
                Ok(None) => {
                    debug!("shell: end of input");
                    self.running = false;
                }
                Err(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("shell: transport read failed: {}", defmt::Debug2Format(&_err));
                    self.running = false;
                    return Err(ShellError::Transport);
                }
            }
            self.flush();
        }

        debug!("shell: session stopped");
        Ok(())
    }

    /// Tokenize `line` and run the command it names.
    ///
    /// Neither the line buffer nor the history is touched. An empty or
    /// all-blank line is a no-op.
    ///
    /// # Errors
    ///
    /// [`ShellError::CommandNotFound`] (after printing
    /// `Command not found: <name>`), or whatever the handler returns.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let tokens = parse_line(line);
        let Some(&name) = tokens.first() else {
            return Ok(());
        };

        let Some(command) = self.commands.find(name).copied() else {
            debug!("shell: unknown command");
            report(writeln!(self.writer(), "Command not found: {}", name));
            return Err(ShellError::CommandNotFound);
        };

        trace!("shell: dispatching {} argument(s)", tokens.len());
        (command.handler)(self, &tokens[..])
    }

    /// Write text as is.
    pub fn print(&mut self, text: &str) {
        report(self.writer().write_str(text));
    }

    /// Write text followed by a newline.
    pub fn println(&mut self, text: &str) {
        report(writeln!(self.writer(), "{}", text));
    }

    /// A [`fmt::Write`] sink over the transport, for `write!`.
    pub fn writer(&mut self) -> TransportWriter<'_, T> {
        TransportWriter::new(&mut self.io)
    }

    /// A renderer over the transport honouring the VT100 setting.
    pub fn vt100(&mut self) -> Vt100<TransportWriter<'_, T>> {
        Vt100::new(TransportWriter::new(&mut self.io), self.config.vt100_enabled)
    }

    /// Print the prompt, in green when VT100 output is enabled.
    pub fn print_prompt(&mut self) {
        let result = self.try_print_prompt();
        report(result);
    }

    fn try_print_prompt(&mut self) -> fmt::Result {
        let prompt = self.config.prompt;
        let mut vt = self.vt100();
        vt.set_color(color::GREEN, None)?;
        vt.write_str(prompt)?;
        vt.reset_color()
    }

    /// Ring the terminal bell.
    pub fn bell(&mut self) {
        report(self.vt100().bell());
    }

    pub(crate) fn flush(&mut self) {
        if self.io.flush().is_err() {
            warn!("shell: flush failed");
        }
    }
}

/// Swallow an output failure.
///
/// The transport has already logged the cause. A terminal that stopped
/// listening must not abort input processing.
pub(crate) fn report(result: fmt::Result) {
    if result.is_err() {
        warn!("shell: output dropped");
    }
}

impl<T, C> fmt::Debug for Shell<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("config", &self.config)
            .field("line", &self.line.as_str())
            .field("history", &self.history)
            .field("commands", &self.commands)
            .field("parameters", &self.parameters)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
