//! Command table and line tokenizer

use core::fmt;

use heapless::Vec;

use super::Shell;
use super::error::{CommandResult, ShellError};

/// Maximum number of tokens taken from one line, command name included.
///
/// Tokens past this bound are dropped.
pub const MAX_ARGS: usize = 16;

/// Maximum number of registered commands, built-ins and shadowed entries
/// included.
pub const MAX_COMMANDS: usize = 32;

/// Function signature for command handlers.
///
/// Handlers receive the session itself, so they can print, read or write
/// parameters, reach the session context, or stop the shell, together with
/// the tokens of the line. `args[0]` is always the command name.
///
/// # Examples
///
/// ```rust
/// use libshell::io::Transport;
/// use libshell::{CommandResult, Shell};
///
/// fn echo<T: Transport, C>(shell: &mut Shell<'_, T, C>, args: &[&str]) -> CommandResult {
///     for arg in &args[1..] {
///         shell.print(arg);
///         shell.print(" ");
///     }
///     shell.println("");
///     Ok(())
/// }
/// ```
pub type CommandFn<'a, T, C> = fn(&mut Shell<'a, T, C>, &[&str]) -> CommandResult;

/// A named command with its help text and handler.
pub struct Command<'a, T, C> {
    /// The command name as typed by the user. Case-sensitive.
    pub name: &'a str,
    /// One-line description shown by `help`.
    pub help: &'a str,
    /// The function that implements the command.
    pub handler: CommandFn<'a, T, C>,
}

impl<T, C> Clone for Command<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Command<'_, T, C> {}

impl<T, C> fmt::Debug for Command<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Registered commands in registration order.
///
/// Registering a name that is already present does not replace the old
/// entry: the newer one shadows it for lookup, and the older one reappears
/// if the newer is unregistered. Every registration takes a slot.
pub struct CommandRegistry<'a, T, C> {
    commands: Vec<Command<'a, T, C>, MAX_COMMANDS>,
}

impl<T, C> Default for CommandRegistry<'_, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, C> CommandRegistry<'a, T, C> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command.
    ///
    /// # Errors
    ///
    /// * [`ShellError::InvalidParameter`] - empty name
    /// * [`ShellError::OutOfMemory`] - all [`MAX_COMMANDS`] slots are taken
    pub fn register(
        &mut self,
        name: &'a str,
        help: &'a str,
        handler: CommandFn<'a, T, C>,
    ) -> Result<(), ShellError> {
        if name.is_empty() {
            return Err(ShellError::InvalidParameter);
        }
        self.commands
            .push(Command {
                name,
                help,
                handler,
            })
            .map_err(|_| ShellError::OutOfMemory)
    }

    /// Remove the most recently registered command called `name`.
    ///
    /// # Errors
    ///
    /// [`ShellError::CommandNotFound`] if no command has that name.
    pub fn unregister(&mut self, name: &str) -> Result<(), ShellError> {
        let index = self
            .commands
            .iter()
            .rposition(|command| command.name == name)
            .ok_or(ShellError::CommandNotFound)?;
        self.commands.remove(index);
        Ok(())
    }

    /// Look up a command; the newest registration wins.
    pub fn find(&self, name: &str) -> Option<&Command<'a, T, C>> {
        self.commands.iter().rev().find(|command| command.name == name)
    }

    /// Every registration, oldest first, shadowed entries included.
    pub fn iter(&self) -> impl Iterator<Item = &Command<'a, T, C>> + '_ {
        self.commands.iter()
    }

    /// Registrations that lookup can reach, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Command<'a, T, C>> + '_ {
        self.commands.iter().enumerate().filter_map(|(index, command)| {
            let shadowed = self.commands[index + 1..]
                .iter()
                .any(|later| later.name == command.name);
            (!shadowed).then_some(command)
        })
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<T, C> fmt::Debug for CommandRegistry<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|command| command.name))
            .finish()
    }
}

/// Split a line into tokens on runs of spaces and tabs.
///
/// At most [`MAX_ARGS`] tokens are returned; the rest of the line is
/// ignored.
///
/// ```text
/// set  name   value    # ["set", "name", "value"]
/// "quoted words"       # ["\"quoted", "words\""]
/// ```
pub fn parse_line(line: &str) -> Vec<&str, MAX_ARGS> {
    let mut tokens = Vec::new();
    for token in line
        .split(|c| c == ' ' || c == '\t')
        .filter(|token| !token.is_empty())
    {
        if tokens.push(token).is_err() {
            break;
        }
    }
    tokens
}
