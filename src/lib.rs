//! # libshell - Embeddable line shell
//!
//! An interactive command line for anything that can move bytes: a UART on a
//! microcontroller, a TCP socket on a gateway, or the standard streams of a
//! host process. The library supports `no_std` and never allocates.
//!
//! ## Features
//!
//! ### Line Editing
//! - Insert and delete anywhere in the line
//! - Arrow keys, Home, End and Delete via VT100 escape sequences
//! - Ctrl-C to abandon a line, Ctrl-L to clear the screen
//!
//! ### History
//! - Bounded recall of past lines with the up and down arrows
//! - Consecutive duplicates collapse into one entry
//!
//! ### Commands and Parameters
//! - Register handlers at runtime; a newer registration shadows an older one
//! - Expose application variables as typed parameters for `get`, `set` and
//!   the full-screen `edit` table
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libshell = "0.1.0"
//! ```
//!
//! ### Serving a session
//!
//! ```rust,no_run
//! use core::cell::Cell;
//! use libshell::{Config, ParamValue, Shell};
//! # use libshell::io::Transport;
//! # struct Uart;
//! # impl Transport for Uart {
//! #     type Error = ();
//! #     fn read_byte(&mut self) -> Result<Option<u8>, ()> { Ok(None) }
//! #     fn write_byte(&mut self, _byte: u8) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! let threshold = Cell::new(42);
//!
//! let mut shell = Shell::new(Uart, Config::default()).unwrap();
//! shell.register_parameter("threshold", ParamValue::Int(&threshold)).unwrap();
//!
//! // Blocks until the transport ends or a command calls `stop()`
//! shell.run().unwrap();
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable [`io::StreamTransport`] over `std::io` streams and TCP
//!   sockets (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod fmt;

/// Byte transports the shell reads from and writes to.
pub mod io;

/// Line editing, history, command dispatch and parameters.
pub mod shell;

/// Stateless VT100/ANSI sequence emitter.
pub mod vt100;

pub use shell::Shell;
pub use shell::command::{Command, CommandFn, CommandRegistry, MAX_ARGS, MAX_COMMANDS};
pub use shell::config::Config;
pub use shell::error::{CommandResult, ShellError};
pub use shell::history::{HistoryBuffer, MAX_HISTORY_SIZE};
pub use shell::line::{LineBuffer, MAX_LINE_LENGTH};
pub use shell::parameter::{
    MAX_PARAMETERS, ParamType, ParamValue, Parameter, ParameterRegistry, text_buffer,
};
