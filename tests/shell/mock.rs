use libshell::io::Transport;
use libshell::{Config, Shell};
use std::collections::VecDeque;

/// Error raised by [`MockTransport`] once its input runs dry in failing mode.
#[derive(Debug, PartialEq)]
pub struct MockError;

/// Scripted transport: reads come from a queue, writes are captured.
#[derive(Debug, Default)]
pub struct MockTransport {
    input: VecDeque<u8>,
    output: Vec<u8>,
    fail_when_empty: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose reads replay `data`, then report end of stream.
    pub fn with_input(data: &[u8]) -> Self {
        Self {
            input: data.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Transport whose reads replay `data`, then fail.
    pub fn failing_after(data: &[u8]) -> Self {
        Self {
            fail_when_empty: true,
            ..Self::with_input(data)
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        match self.input.pop_front() {
            Some(byte) => Ok(Some(byte)),
            None if self.fail_when_empty => Err(MockError),
            None => Ok(None),
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.output.push(byte);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.output.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Configuration without escape sequences, so output is plain text.
pub fn plain_config() -> Config<'static> {
    Config {
        vt100_enabled: false,
        ..Config::default()
    }
}

/// Shell on an empty transport with VT100 output disabled.
pub fn plain_shell<'a>() -> Shell<'a, MockTransport> {
    Shell::new(MockTransport::new(), plain_config()).unwrap()
}
