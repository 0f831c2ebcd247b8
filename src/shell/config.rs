//! Session configuration

/// Prompt printed when none is configured.
pub const DEFAULT_PROMPT: &str = "$ ";

/// History depth used by [`Config::default`].
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Per-session settings.
///
/// The transport is not part of the configuration; it is handed to
/// [`Shell::new`](super::Shell::new) separately.
///
/// # Examples
///
/// ```rust
/// use libshell::Config;
///
/// let config = Config {
///     prompt: "dev> ",
///     vt100_enabled: false,
///     ..Config::default()
/// };
/// assert_eq!(config.history_size, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config<'a> {
    /// Number of past lines kept for arrow-key recall. `0` disables history.
    pub history_size: usize,
    /// Emit VT100/ANSI control sequences. Turn off for dumb terminals and
    /// raw serial logs.
    pub vt100_enabled: bool,
    /// Text printed before every input line.
    pub prompt: &'a str,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            vt100_enabled: true,
            prompt: DEFAULT_PROMPT,
        }
    }
}
