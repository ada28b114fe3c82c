//! Problem definition and text input
//!
//! A [`Problem`] is a validated set of minterms and don't-cares over a fixed
//! number of variables. It can be built directly or read from the plain
//! integer protocol through [`ProblemReader`]:
//!
//! ```text
//! 4              # number of variables
//! 7 4 5 6 8 9 10 13
//! 3 0 7 15       # don't-cares (this section is optional)
//! ```
//!
//! Each list is a count followed by that many values. Tokens are separated by
//! any whitespace and `#` starts a comment that runs to the end of the line.

mod error;

pub use error::{InputError, ReadError};

use crate::term::MAX_VARIABLES;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A validated minimization problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    width: usize,
    minterms: Vec<u32>,
    dontcares: Vec<u32>,
}

impl Problem {
    /// Validate and build a problem
    ///
    /// Rejects a variable count outside `1..=32`, values that do not fit in
    /// `width` bits, values repeated within a list, and values present in both
    /// lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{InputError, Problem};
    ///
    /// let problem = Problem::new(3, &[1, 3, 7], &[5]).unwrap();
    /// assert_eq!(problem.width(), 3);
    ///
    /// let err = Problem::new(3, &[1, 3], &[3]).unwrap_err();
    /// assert_eq!(err, InputError::Overlap { value: 3 });
    /// ```
    pub fn new(width: usize, minterms: &[u32], dontcares: &[u32]) -> Result<Self, InputError> {
        let width = i64::try_from(width).unwrap_or(i64::MAX);
        let minterms: Vec<i64> = minterms.iter().map(|&v| i64::from(v)).collect();
        let dontcares: Vec<i64> = dontcares.iter().map(|&v| i64::from(v)).collect();
        Self::validate(width, &minterms, &dontcares)
    }

    fn validate(width: i64, minterms: &[i64], dontcares: &[i64]) -> Result<Self, InputError> {
        if width < 1 || width > MAX_VARIABLES as i64 {
            return Err(InputError::InvalidVariableCount {
                count: width,
                max: MAX_VARIABLES,
            });
        }
        let width = width as usize;

        let minterms = Self::validate_list(width, minterms)?;
        let dontcares = Self::validate_list(width, dontcares)?;

        let on_set: HashSet<u32> = minterms.iter().copied().collect();
        if let Some(&value) = dontcares.iter().find(|v| on_set.contains(*v)) {
            return Err(InputError::Overlap { value });
        }

        Ok(Problem {
            width,
            minterms,
            dontcares,
        })
    }

    fn validate_list(width: usize, values: &[i64]) -> Result<Vec<u32>, InputError> {
        let limit = 1i64 << width;
        let mut seen = HashSet::with_capacity(values.len());
        values
            .iter()
            .map(|&value| {
                if !(0..limit).contains(&value) {
                    return Err(InputError::ValueOutOfRange { value, width });
                }
                let value = value as u32;
                if !seen.insert(value) {
                    return Err(InputError::DuplicateTerm { value });
                }
                Ok(value)
            })
            .collect()
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Values the function must be true for, in input order
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Values whose output is unconstrained, in input order
    pub fn dontcares(&self) -> &[u32] {
        &self.dontcares
    }
}

/// Trait for types that can be read from the integer text protocol
///
/// The provided methods delegate to [`from_reader`](Self::from_reader).
pub trait ProblemReader: Sized {
    /// Parse from any `BufRead` implementation
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReadError>;

    /// Parse from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Problem, ProblemReader};
    ///
    /// let problem = Problem::from_text("2\n3 0 1 2\n0\n").unwrap();
    /// assert_eq!(problem.width(), 2);
    /// assert_eq!(problem.minterms(), [0, 1, 2]);
    /// assert!(problem.dontcares().is_empty());
    /// ```
    fn from_text(s: &str) -> Result<Self, ReadError> {
        Self::from_reader(s.as_bytes())
    }

    /// Load from a file
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl ProblemReader for Problem {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let content = line.split('#').next().unwrap_or("");
            tokens.extend(content.split_whitespace().map(str::to_owned));
        }
        let mut tokens = Tokens {
            inner: tokens.into_iter().peekable(),
        };

        let width = tokens.next_int("variable count")?;
        let minterms = tokens.next_list("minterm")?;
        let dontcares = if tokens.is_exhausted() {
            Vec::new()
        } else {
            tokens.next_list("don't-care")?
        };

        Ok(Problem::validate(width, &minterms, &dontcares)?)
    }
}

struct Tokens {
    inner: std::iter::Peekable<std::vec::IntoIter<String>>,
}

impl Tokens {
    fn is_exhausted(&mut self) -> bool {
        self.inner.peek().is_none()
    }

    fn next_int(&mut self, what: &'static str) -> Result<i64, InputError> {
        let token = self.inner.next().ok_or(InputError::MissingValue { what })?;
        token
            .parse()
            .map_err(|_| InputError::InvalidNumber { token })
    }

    fn next_list(&mut self, what: &'static str) -> Result<Vec<i64>, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::MissingValue { what: "count" })?;
        let count: usize = token
            .parse()
            .map_err(|_| InputError::InvalidNumber { token })?;
        (0..count).map(|_| self.next_int(what)).collect()
    }
}
