//! Minimal cover search
//!
//! [`CoverSolver`] picks the fewest prime implicants that together cover every
//! minterm of a [`CoverageTable`]. Essential implicants are extracted first, in
//! row order; when none is left the search branches over every remaining prime
//! and keeps the smallest result.
//!
//! The selection criterion is the number of implicants. Ties go to the
//! candidate found first, in prime order, with no regard to literal count.

mod error;

pub use error::SolveError;

use crate::coverage::CoverageTable;
use crate::term::Term;
use log::{debug, trace};

/// Default bound on nested branches
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Exact minimal-cover search over a [`CoverageTable`]
///
/// # Examples
///
/// ```
/// use qm_logic::{CoverSolver, CoverageTable, ImplicantGenerator};
///
/// let mut generator = ImplicantGenerator::new(2, &[0, 1, 2], &[]);
/// generator.generate();
/// let table = CoverageTable::new(
///     2,
///     generator.prime_implicants(),
///     generator.minterms().to_vec(),
/// );
///
/// let cover = CoverSolver::new().solve(&table).unwrap();
/// let patterns: Vec<String> = cover.iter().map(|t| t.pattern(2)).collect();
/// assert_eq!(patterns, ["0-", "-0"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverSolver {
    max_depth: usize,
}

impl Default for CoverSolver {
    fn default() -> Self {
        CoverSolver {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CoverSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of nested branches
    ///
    /// Every branch on a prime adds one level; extracting essential primes
    /// does not. A search that would branch deeper fails with
    /// [`SolveError::DepthLimitExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Find a minimum-cardinality set of primes covering every minterm
    ///
    /// Essential primes come first, in the order they were extracted.
    pub fn solve(&self, table: &CoverageTable) -> Result<Vec<Term>, SolveError> {
        if let Some(row) = table.uncovered_row() {
            return Err(SolveError::UncoverableMinterm {
                minterm: table.minterms()[row].value(),
            });
        }
        let cover = self.search(table, 0, usize::MAX)?;
        cover.ok_or_else(|| SolveError::UncoverableMinterm {
            minterm: table.minterms().first().map_or(0, Term::value),
        })
    }

    /// Search for a cover of fewer than `limit` terms
    ///
    /// Returns `None` when no such cover exists. A branch is abandoned as soon
    /// as it cannot beat the best candidate so far, so the first minimal
    /// candidate in prime order is still the one returned.
    fn search(
        &self,
        table: &CoverageTable,
        depth: usize,
        limit: usize,
    ) -> Result<Option<Vec<Term>>, SolveError> {
        let columns = table.essential_columns();
        let mut cover: Vec<Term> = Vec::with_capacity(columns.len());
        for &col in &columns {
            let essential = table.primes()[col];
            debug!(
                "depth {}: essential {}",
                depth,
                essential.pattern(table.width())
            );
            cover.push(essential);
        }

        let reduced;
        let table = if columns.is_empty() {
            table
        } else {
            reduced = table.without_primes(&columns);
            &reduced
        };

        if table.is_empty() {
            return Ok((cover.len() < limit).then_some(cover));
        }
        if cover.len() + 1 >= limit {
            return Ok(None);
        }
        if depth >= self.max_depth {
            return Err(SolveError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }

        let remaining = limit - cover.len();
        let mut best: Option<Vec<Term>> = None;
        for (col, &prime) in table.primes().iter().enumerate() {
            let bound = best.as_ref().map_or(remaining, Vec::len);
            if bound <= 1 {
                break;
            }
            let Some(rest) = self.search(&table.without_prime(col), depth + 1, bound - 1)? else {
                continue;
            };
            trace!(
                "depth {}: branch on {} gives {} terms",
                depth,
                prime.pattern(table.width()),
                rest.len() + 1
            );
            let mut candidate = Vec::with_capacity(rest.len() + 1);
            candidate.push(prime);
            candidate.extend(rest);
            best = Some(candidate);
        }

        Ok(best.map(|branch| {
            cover.extend(branch);
            cover
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implicant(a: u32, b: u32) -> Term {
        Term::minterm(a).merge(&Term::minterm(b))
    }

    fn minterms(values: &[u32]) -> Vec<Term> {
        values.iter().map(|&v| Term::minterm(v)).collect()
    }

    fn patterns(terms: &[Term], width: usize) -> Vec<String> {
        terms.iter().map(|t| t.pattern(width)).collect()
    }

    #[test]
    fn test_empty_minterms_give_empty_cover() {
        let table = CoverageTable::new(2, vec![implicant(0, 1)], Vec::new());
        assert!(CoverSolver::new().solve(&table).unwrap().is_empty());
    }

    #[test]
    fn test_essentials_extracted_in_row_order() {
        let table = CoverageTable::new(
            2,
            vec![implicant(0, 1), implicant(0, 2)],
            minterms(&[0, 2, 1]),
        );
        let cover = CoverSolver::new().solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["-0", "0-"]);
    }

    #[test]
    fn test_cyclic_core_tie_goes_to_first_prime() {
        // 0-, -1, 1-, -0 over all four minterms: both {0-,1-} and {-1,-0} are
        // minimal; the branch on the first prime wins
        let primes = vec![
            implicant(0, 1),
            implicant(1, 3),
            implicant(3, 2),
            implicant(2, 0),
        ];
        let table = CoverageTable::new(2, primes, minterms(&[0, 1, 2, 3]));
        let cover = CoverSolver::new().solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["0-", "1-"]);
    }

    #[test]
    fn test_cyclic_core_order_sensitivity() {
        let primes = vec![
            implicant(1, 3),
            implicant(0, 1),
            implicant(3, 2),
            implicant(2, 0),
        ];
        let table = CoverageTable::new(2, primes, minterms(&[0, 1, 2, 3]));
        let cover = CoverSolver::new().solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["-1", "-0"]);
    }

    #[test]
    fn test_redundant_prime_is_skipped() {
        // 0- alone covers both minterms; 00 is redundant
        let primes = vec![Term::minterm(0), implicant(0, 1)];
        let table = CoverageTable::new(2, primes, minterms(&[0, 1]));
        let cover = CoverSolver::new().solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["0-"]);
    }

    #[test]
    fn test_uncoverable_minterm_is_reported() {
        let table = CoverageTable::new(2, vec![implicant(0, 1)], minterms(&[0, 3]));
        let err = CoverSolver::new().solve(&table).unwrap_err();
        assert_eq!(err, SolveError::UncoverableMinterm { minterm: 3 });
    }

    #[test]
    fn test_depth_limit_counts_branches() {
        let primes = vec![
            implicant(0, 1),
            implicant(1, 3),
            implicant(3, 2),
            implicant(2, 0),
        ];
        let table = CoverageTable::new(2, primes, minterms(&[0, 1, 2, 3]));
        for max_depth in [1, 2] {
            let err = CoverSolver::new()
                .with_max_depth(max_depth)
                .solve(&table)
                .unwrap_err();
            assert_eq!(err, SolveError::DepthLimitExceeded { limit: max_depth });
        }

        let cover = CoverSolver::new().with_max_depth(3).solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["0-", "1-"]);
    }

    #[test]
    fn test_essentials_do_not_count_towards_depth() {
        let table = CoverageTable::new(
            2,
            vec![implicant(0, 1), implicant(0, 2)],
            minterms(&[0, 1, 2]),
        );
        let cover = CoverSolver::new().with_max_depth(0).solve(&table).unwrap();
        assert_eq!(patterns(&cover, 2), ["0-", "-0"]);
    }

    #[test]
    fn test_long_essential_chain() {
        // odd parity over 10 variables: 512 isolated minterms, each its own prime
        let values: Vec<u32> = (0..1u32 << 10).filter(|v| v.count_ones() % 2 == 1).collect();
        let table = CoverageTable::new(10, minterms(&values), minterms(&values));
        let cover = CoverSolver::new().with_max_depth(1).solve(&table).unwrap();
        assert_eq!(cover, minterms(&values));
    }
}
