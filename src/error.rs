//! Error types for the Quine-McCluskey minimizer
//!
//! [`QmError`] is the error returned by the top-level entry points. It wraps the
//! module-specific errors so callers can still tell them apart.

use crate::input::{InputError, ReadError};
use crate::solver::SolveError;
use std::fmt;
use std::io;

/// The main error type for the minimizer
#[derive(Debug)]
pub enum QmError {
    /// The problem was rejected before minimization started
    Input(InputError),
    /// The cover search gave up
    Solve(SolveError),
    /// IO error wrapper
    ///
    /// Raised while reading a problem or writing a report.
    Io(io::Error),
}

impl fmt::Display for QmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QmError::Input(err) => write!(f, "Invalid problem: {}", err),
            QmError::Solve(err) => write!(f, "Minimization failed: {}", err),
            QmError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for QmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QmError::Input(err) => Some(err),
            QmError::Solve(err) => Some(err),
            QmError::Io(err) => Some(err),
        }
    }
}

impl From<InputError> for QmError {
    fn from(err: InputError) -> Self {
        QmError::Input(err)
    }
}

impl From<SolveError> for QmError {
    fn from(err: SolveError) -> Self {
        QmError::Solve(err)
    }
}

impl From<ReadError> for QmError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Input(e) => QmError::Input(e),
            ReadError::Io(e) => QmError::Io(e),
        }
    }
}

impl From<io::Error> for QmError {
    fn from(err: io::Error) -> Self {
        QmError::Io(err)
    }
}

// Conversion from QmError to io::Error for callers working in io::Result
impl From<QmError> for io::Error {
    fn from(err: QmError) -> Self {
        match err {
            QmError::Io(io_err) => io_err,
            QmError::Input(e) => e.into(),
            other => io::Error::other(other),
        }
    }
}
