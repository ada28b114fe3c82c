//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes a minimal sum-of-products cover for a Boolean function
//! of up to 32 variables, given as a set of minterms and a set of don't-cares.
//!
//! ## Overview
//!
//! The Quine-McCluskey method works in two phases:
//!
//! 1. **Prime implicant generation** - terms that differ in exactly one bit are
//!    merged into more general terms, level by level, until nothing merges.
//!    The survivors are the prime implicants.
//! 2. **Cover selection** - essential prime implicants are taken first, then an
//!    exhaustive branch search picks the fewest primes covering the rest.
//!
//! The result is exact: the cover has the smallest possible number of
//! implicants. Ties between equally small covers are broken by the order the
//! primes were generated in, not by literal count. Running time is exponential
//! in the worst case.
//!
//! ## Quick Start
//!
//! ```
//! use qm_logic::{Problem, QmConfig};
//!
//! # fn main() -> Result<(), qm_logic::QmError> {
//! // f(a, b) = 1 for ab = 00, 01, 10
//! let problem = Problem::new(2, &[0, 1, 2], &[])?;
//! let result = problem.minimize(&QmConfig::default())?;
//!
//! let terms: Vec<String> = result.cover().terms().iter().map(|t| t.pattern(2)).collect();
//! assert_eq!(terms, ["0-", "-0"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading Problems From Text
//!
//! ```
//! use qm_logic::{Problem, ProblemReader, QmConfig, ReportWriter};
//!
//! # fn main() -> Result<(), qm_logic::QmError> {
//! let problem = Problem::from_text("4\n7 4 5 6 8 9 10 13\n3 0 7 15\n")?;
//! let result = problem.minimize(&QmConfig::default())?;
//!
//! // Levels, coverage matrix and cover in the classic tabular layout
//! print!("{}", result.to_report_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Working With the Stages Directly
//!
//! Each phase is exposed on its own: [`ImplicantGenerator`] for the merge
//! sweep, [`CoverageTable`] for the prime/minterm matrix, and [`CoverSolver`]
//! for the cover search.
//!
//! ```
//! use qm_logic::{CoverSolver, CoverageTable, ImplicantGenerator};
//!
//! let mut generator = ImplicantGenerator::new(3, &[0, 1, 2, 3], &[]);
//! generator.generate();
//!
//! let table = CoverageTable::new(3, generator.prime_implicants(), generator.minterms().to_vec());
//! let cover = CoverSolver::new().solve(&table).unwrap();
//! assert_eq!(cover.len(), 1);
//! assert_eq!(cover[0].pattern(3), "0--");
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: merge-level and essential-prime
//! progress at `debug`, individual merges and branches at `trace`. Install any
//! `log` implementation to see it.

pub mod config;
pub mod coverage;
pub mod error;
pub mod implicants;
pub mod input;
pub mod minimize;
pub mod report;
pub mod solver;
pub mod term;

// Re-export high-level public API
pub use config::QmConfig;
pub use coverage::CoverageTable;
pub use error::QmError;
pub use implicants::{Group, ImplicantGenerator, Level};
pub use input::{InputError, Problem, ProblemReader, ReadError};
pub use minimize::{Cover, Minimization, MinimizationStats};
pub use report::{ReportOptions, ReportWriter};
pub use solver::{CoverSolver, SolveError};
pub use term::{Term, TermDisplay, TermStatus, MAX_VARIABLES};
