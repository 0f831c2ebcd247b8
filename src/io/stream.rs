//! [`Transport`] over standard library streams.
//!
//! Covers the hosted cases: the process's own stdin/stdout, a TCP
//! connection, or a serial device opened as a file.

use std::io::{self, Read, Stdin, Stdout, Write};
use std::net::TcpStream;

use super::Transport;

/// A transport built from any `std::io` reader and writer pair.
#[derive(Debug)]
pub struct StreamTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R: Read, W: Write> StreamTransport<R, W> {
    /// Pair a reader with a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Split back into the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamTransport<Stdin, Stdout> {
    /// Transport over the process's standard input and output.
    ///
    /// The terminal's own line discipline stays in charge, so input arrives
    /// a line at a time unless the caller puts the terminal in raw mode.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl StreamTransport<TcpStream, TcpStream> {
    /// Transport over an accepted or connected TCP stream.
    ///
    /// # Errors
    ///
    /// Fails if the socket handle cannot be duplicated for the write half.
    pub fn tcp(stream: TcpStream) -> io::Result<Self> {
        let writer = stream.try_clone()?;
        Ok(Self::new(stream, writer))
    }
}

impl<R: Read, W: Write> Transport for StreamTransport<R, W> {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.writer.write_all(&[byte])
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.writer.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
