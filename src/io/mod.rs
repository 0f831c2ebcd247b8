//! Byte transport abstraction for the shell.
//!
//! The shell never talks to hardware or sockets directly. Everything it reads
//! and writes goes through a [`Transport`], a pull-based byte source paired
//! with a byte sink. Implementations exist for whatever the device offers: a
//! UART peripheral, a TCP socket, standard streams, or a test double.
//!
//! ```text
//! ┌─────────────────┐  read_byte()  ┌─────────────────┐
//! │    Transport    │──────────────▶│      Shell      │
//! │ (UART/TCP/stdio)│◀──────────────│  (state machine)│
//! └─────────────────┘  write_str()  └─────────────────┘
//! ```
//!
//! # Implementing a transport
//!
//! ```rust
//! use libshell::io::Transport;
//!
//! struct Loopback {
//!     pending: Option<u8>,
//! }
//!
//! impl Transport for Loopback {
//!     type Error = ();
//!
//!     fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
//!         Ok(self.pending.take())
//!     }
//!
//!     fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
//!         self.pending = Some(byte);
//!         Ok(())
//!     }
//! }
//! ```

#![deny(unsafe_code)]

use core::fmt;

#[cfg(feature = "std")]
pub mod stream;

#[cfg(feature = "std")]
pub use stream::StreamTransport;

/// A bidirectional byte stream driving one shell session.
///
/// Reads are blocking from the shell's point of view: [`read_byte`] is
/// expected to wait until a byte arrives, the stream ends, or an error
/// occurs.
///
/// [`read_byte`]: Transport::read_byte
pub trait Transport {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Read the next input byte.
    ///
    /// Returns `Ok(None)` once the stream has ended.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a whole string.
    ///
    /// The default implementation writes byte by byte; transports with a
    /// bulk send path should override it.
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write_str(text)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// [`core::fmt::Write`] adapter over a [`Transport`].
///
/// Lets `write!` format straight into the transport without an intermediate
/// buffer. Transport errors are logged and surface as [`fmt::Error`].
pub struct TransportWriter<'t, T: Transport> {
    io: &'t mut T,
}

impl<'t, T: Transport> TransportWriter<'t, T> {
    /// Wrap a transport.
    pub fn new(io: &'t mut T) -> Self {
        Self { io }
    }
}

impl<T: Transport> fmt::Write for TransportWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.io.write_str(s).map_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("transport write failed: {}", defmt::Debug2Format(&_err));
            fmt::Error
        })
    }
}

impl<T: Transport> fmt::Debug for TransportWriter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportWriter").finish_non_exhaustive()
    }
}
