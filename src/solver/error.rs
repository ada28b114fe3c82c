//! Error types for the cover search

use std::fmt;
use std::io;

/// Errors raised while searching for a minimal cover
///
/// Tables built by [`ImplicantGenerator`] never trigger
/// [`SolveError::UncoverableMinterm`]; it guards tables assembled by hand.
///
/// [`ImplicantGenerator`]: crate::ImplicantGenerator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The search recursed deeper than the configured limit
    DepthLimitExceeded {
        /// The configured maximum depth
        limit: usize,
    },
    /// A minterm is not covered by any remaining prime implicant
    UncoverableMinterm {
        /// The raw value of the minterm
        minterm: u32,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::DepthLimitExceeded { limit } => {
                write!(f, "Cover search exceeded the maximum depth of {}", limit)
            }
            SolveError::UncoverableMinterm { minterm } => {
                write!(f, "Minterm {} is not covered by any prime implicant", minterm)
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<SolveError> for io::Error {
    fn from(err: SolveError) -> Self {
        io::Error::other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_display() {
        let err = SolveError::DepthLimitExceeded { limit: 12 };
        assert!(err.to_string().contains("maximum depth of 12"));
    }

    #[test]
    fn test_uncoverable_display() {
        let err = SolveError::UncoverableMinterm { minterm: 9 };
        assert!(err.to_string().contains("Minterm 9"));
    }

    #[test]
    fn test_solve_error_to_io_error() {
        let io_err: io::Error = SolveError::DepthLimitExceeded { limit: 1 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
