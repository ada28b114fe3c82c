//! Error types for problem input and validation

use std::fmt;
use std::io;

/// Errors related to validating or parsing a minimization problem
///
/// These are reported before any [`Term`] is built.
///
/// [`Term`]: crate::Term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Variable count is zero, negative, or above the supported maximum
    InvalidVariableCount {
        /// The requested number of variables
        count: i64,
        /// The largest accepted number of variables
        max: usize,
    },
    /// A minterm or don't-care does not fit in the variable count
    ValueOutOfRange {
        /// The offending value
        value: i64,
        /// The number of variables
        width: usize,
    },
    /// The same value appears twice within one list
    DuplicateTerm {
        /// The repeated value
        value: u32,
    },
    /// A value is listed both as a minterm and as a don't-care
    Overlap {
        /// The value present in both lists
        value: u32,
    },
    /// The input ended before a required number
    MissingValue {
        /// What was being read
        what: &'static str,
    },
    /// A token could not be read as an integer
    InvalidNumber {
        /// The token that failed to parse
        token: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidVariableCount { count, max } => write!(
                f,
                "Invalid variable count {} (expected 1..={})",
                count, max
            ),
            InputError::ValueOutOfRange { value, width } => write!(
                f,
                "Value {} is out of range for {} variables (expected 0..{})",
                value,
                width,
                1u64 << width
            ),
            InputError::DuplicateTerm { value } => {
                write!(f, "Value {} is listed more than once", value)
            }
            InputError::Overlap { value } => {
                write!(f, "Value {} is both a minterm and a don't-care", value)
            }
            InputError::MissingValue { what } => {
                write!(f, "Unexpected end of input while reading {}", what)
            }
            InputError::InvalidNumber { token } => {
                write!(f, "Invalid number '{}'", token)
            }
        }
    }
}

impl std::error::Error for InputError {}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors that can occur when reading a problem from text
///
/// This error type is returned by the [`ProblemReader`] methods.
///
/// [`ProblemReader`]: crate::ProblemReader
#[derive(Debug)]
pub enum ReadError {
    /// Malformed or invalid problem
    Input(InputError),
    /// I/O error while reading
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Input(e) => write!(f, "{}", e),
            ReadError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Input(e) => Some(e),
            ReadError::Io(e) => Some(e),
        }
    }
}

impl From<InputError> for ReadError {
    fn from(err: InputError) -> Self {
        ReadError::Input(err)
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<ReadError> for io::Error {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Input(e) => e.into(),
            ReadError::Io(e) => e,
        }
    }
}
