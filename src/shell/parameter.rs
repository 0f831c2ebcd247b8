//! Typed runtime parameters
//!
//! A parameter is a named reference to a value the application owns. The
//! shell never takes ownership: it formats the value for `get` and `edit` and
//! overwrites it for `set`. Storage lives in [`Cell`]/[`RefCell`] so the
//! application keeps reading it while the shell holds its reference, and the
//! `'a` lifetime ties every reference to storage that outlives the shell.
//!
//! ```rust
//! use core::cell::Cell;
//! use libshell::shell::parameter::{text_buffer, ParamValue, ParameterRegistry};
//!
//! let baud = Cell::new(9600);
//! let name = text_buffer::<16>("node-1");
//!
//! let mut params = ParameterRegistry::new();
//! params.register("baud", ParamValue::Int(&baud)).unwrap();
//! params.register("name", ParamValue::Text(&name)).unwrap();
//!
//! params.find("baud").unwrap().value.parse_and_store("115200");
//! assert_eq!(baud.get(), 115200);
//! ```

use core::cell::{Cell, RefCell};
use core::fmt;
use core::str;

use heapless::Vec;

use super::error::ShellError;

/// Maximum number of registered parameters, shadowed entries included.
pub const MAX_PARAMETERS: usize = 32;

/// The kind of value a parameter refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// 32-bit signed integer
    Int,
    /// 32-bit float
    Float,
    /// NUL-terminated text in a fixed byte buffer
    Text,
    /// Boolean flag
    Bool,
}

impl ParamType {
    /// Name shown in the parameter editor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "string",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Reference to caller-owned parameter storage.
#[derive(Debug, Clone, Copy)]
pub enum ParamValue<'a> {
    /// Integer storage
    Int(&'a Cell<i32>),
    /// Float storage
    Float(&'a Cell<f32>),
    /// Text storage. The slice length is the capacity, terminator included.
    Text(&'a RefCell<[u8]>),
    /// Boolean storage
    Bool(&'a Cell<bool>),
}

impl ParamValue<'_> {
    /// The kind of value referenced.
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Int(_) => ParamType::Int,
            Self::Float(_) => ParamType::Float,
            Self::Text(_) => ParamType::Text,
            Self::Bool(_) => ParamType::Bool,
        }
    }

    /// Buffer size of a text parameter, `None` for the other kinds.
    ///
    /// Reports `Some(0)` while the application holds the buffer mutably
    /// borrowed.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::Text(buf) => Some(buf.try_borrow().map_or(0, |buf| buf.len())),
            _ => None,
        }
    }

    /// Convert `text` and write it to the referenced storage.
    ///
    /// Conversion never fails. Numbers use the longest numeric prefix of
    /// `text` and fall back to zero when there is none, so `set rate abc`
    /// stores `0`. Floats are read in decimal notation only (sign, digits,
    /// fraction, exponent): `inf`, `nan` and hex floats store `0.0`. Text is
    /// truncated to the buffer capacity minus one and NUL-terminated. A flag
    /// becomes `true` only for exactly `true`, `1` or `yes`; anything else
    /// stores `false`.
    pub fn parse_and_store(&self, text: &str) {
        match self {
            Self::Int(cell) => cell.set(parse_int(text)),
            Self::Float(cell) => cell.set(parse_float(text)),
            Self::Text(cell) => match cell.try_borrow_mut() {
                Ok(mut buf) => store_text(&mut buf, text),
                Err(_) => warn!("parameter: text storage is borrowed, value dropped"),
            },
            Self::Bool(cell) => cell.set(matches!(text, "true" | "1" | "yes")),
        }
    }
}

/// Formats the current value: decimal integers, floats with two decimals,
/// raw text, and `true`/`false`.
impl fmt::Display for ParamValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(cell) => write!(f, "{}", cell.get()),
            Self::Float(cell) => write!(f, "{:.2}", cell.get()),
            Self::Text(cell) => {
                let buf = cell.try_borrow().map_err(|_| fmt::Error)?;
                f.write_str(read_text(&buf))
            }
            Self::Bool(cell) => f.write_str(if cell.get() { "true" } else { "false" }),
        }
    }
}

/// A named parameter.
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    /// Name used by `get` and `set`.
    pub name: &'a str,
    /// The referenced storage.
    pub value: ParamValue<'a>,
}

impl Parameter<'_> {
    /// The kind of value referenced.
    pub fn param_type(&self) -> ParamType {
        self.value.param_type()
    }
}

/// Registered parameters in registration order.
///
/// Lookup follows the same shadowing rule as commands: the newest
/// registration of a name wins.
#[derive(Debug, Default)]
pub struct ParameterRegistry<'a> {
    parameters: Vec<Parameter<'a>, MAX_PARAMETERS>,
}

impl<'a> ParameterRegistry<'a> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    /// Add a parameter.
    ///
    /// # Errors
    ///
    /// * [`ShellError::InvalidParameter`] - empty name, or text storage with
    ///   no room for the terminator
    /// * [`ShellError::OutOfMemory`] - all [`MAX_PARAMETERS`] slots are taken
    pub fn register(&mut self, name: &'a str, value: ParamValue<'a>) -> Result<(), ShellError> {
        if name.is_empty() || value.capacity() == Some(0) {
            return Err(ShellError::InvalidParameter);
        }
        self.parameters
            .push(Parameter { name, value })
            .map_err(|_| ShellError::OutOfMemory)
    }

    /// Remove the most recently registered parameter called `name`.
    ///
    /// The referenced storage is left as it is.
    ///
    /// # Errors
    ///
    /// [`ShellError::ParameterNotFound`] if no parameter has that name.
    pub fn unregister(&mut self, name: &str) -> Result<(), ShellError> {
        let index = self
            .parameters
            .iter()
            .rposition(|param| param.name == name)
            .ok_or(ShellError::ParameterNotFound)?;
        self.parameters.remove(index);
        Ok(())
    }

    /// Look up a parameter; the newest registration wins.
    pub fn find(&self, name: &str) -> Option<&Parameter<'a>> {
        self.parameters.iter().rev().find(|param| param.name == name)
    }

    /// Every registration, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter<'a>> + '_ {
        self.parameters.iter()
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Create text storage of `N` bytes holding `initial`.
///
/// `initial` is truncated to `N - 1` bytes to leave room for the terminator.
pub fn text_buffer<const N: usize>(initial: &str) -> RefCell<[u8; N]> {
    let mut buf = [0u8; N];
    store_text(&mut buf, initial);
    RefCell::new(buf)
}

/// Contents of a NUL-terminated text buffer.
///
/// Stops at the first NUL (or the end of the buffer) and at the first byte
/// that is not valid UTF-8.
pub fn read_text(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let bytes = &buf[..end];
    match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    }
}

/// Copy up to `buf.len() - 1` bytes of `text` and terminate.
fn store_text(buf: &mut [u8], text: &str) {
    let Some(limit) = buf.len().checked_sub(1) else {
        return;
    };
    let len = text.len().min(limit);
    buf[..len].copy_from_slice(&text.as_bytes()[..len]);
    buf[len] = 0;
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Leading decimal integer of `text`, saturating at the `i32` range; `0` if
/// there is none.
pub(crate) fn parse_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let limit = i64::from(i32::MAX) + 1;
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(limit));

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).unwrap_or_default()
}

/// Leading decimal float of `text` (sign, digits, fraction, exponent); `0.0`
/// if there is none.
pub(crate) fn parse_float(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}
