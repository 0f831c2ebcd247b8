//! Shell error types

/// Error returned by shell operations and command handlers.
///
/// None of these end a session on their own: a failed command prints its
/// message and the shell prompts again.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShellError {
    /// Invalid parameter was provided to a shell operation (for example an
    /// empty name).
    InvalidParameter,
    /// A fixed-capacity table is full.
    OutOfMemory,
    /// Text did not fit the buffer it was meant for.
    BufferOverflow,
    /// The first token of a line names no registered command.
    CommandNotFound,
    /// No parameter is registered under the given name.
    ParameterNotFound,
    /// A command was invoked with missing arguments.
    Usage,
    /// `edit` was invoked with an empty parameter registry.
    NoParameters,
    /// The transport failed to deliver input.
    Transport,
}

impl ShellError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "E01",
            Self::OutOfMemory => "E02",
            Self::BufferOverflow => "E03",
            Self::CommandNotFound => "E04",
            Self::ParameterNotFound => "E05",
            Self::Usage => "E06",
            Self::NoParameters => "E07",
            Self::Transport => "E08",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "invalid parameter",
            Self::OutOfMemory => "out of memory",
            Self::BufferOverflow => "buffer overflow",
            Self::CommandNotFound => "command not found",
            Self::ParameterNotFound => "parameter not found",
            Self::Usage => "missing argument",
            Self::NoParameters => "no parameters registered",
            Self::Transport => "transport error",
        }
    }
}

impl core::fmt::Display for ShellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ShellError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ShellError::InvalidParameter => defmt::write!(f, "InvalidParameter"),
            ShellError::OutOfMemory => defmt::write!(f, "OutOfMemory"),
            ShellError::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            ShellError::CommandNotFound => defmt::write!(f, "CommandNotFound"),
            ShellError::ParameterNotFound => defmt::write!(f, "ParameterNotFound"),
            ShellError::Usage => defmt::write!(f, "Usage"),
            ShellError::NoParameters => defmt::write!(f, "NoParameters"),
            ShellError::Transport => defmt::write!(f, "Transport"),
        }
    }
}

/// Result of running a command.
pub type CommandResult = Result<(), ShellError>;
