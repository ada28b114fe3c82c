//! End-to-end minimization pipeline
//!
//! [`Problem::minimize`] runs the three stages in order:
//! 1. [`ImplicantGenerator`] derives the prime implicants from minterms and don't-cares
//! 2. [`CoverageTable`] relates those primes to the minterms (don't-cares excluded)
//! 3. [`CoverSolver`] picks the fewest primes covering every minterm

use crate::config::QmConfig;
use crate::coverage::CoverageTable;
use crate::error::QmError;
use crate::implicants::{ImplicantGenerator, Level};
use crate::input::{InputError, Problem};
use crate::solver::CoverSolver;
use crate::term::Term;
use log::{debug, info};

/// A set of prime implicants forming a sum-of-products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    width: usize,
    terms: Vec<Term>,
}

impl Cover {
    pub(crate) fn new(width: usize, terms: Vec<Term>) -> Self {
        Cover { width, terms }
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Selected implicants, essential ones first
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of implicants
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals across all implicants
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|t| t.literal_count(self.width)).sum()
    }

    /// Check that every value is covered by at least one implicant
    pub fn covers_all(&self, minterms: &[u32]) -> bool {
        minterms.iter().all(|&m| self.covers(m))
    }

    /// Evaluate the sum-of-products for one input combination
    pub fn covers(&self, value: u32) -> bool {
        let minterm = Term::minterm(value);
        self.terms.iter().any(|t| t.covers(&minterm))
    }
}

/// Summary statistics of a minimization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizationStats {
    /// Number of required minterms
    pub num_minterms: usize,
    /// Number of don't-cares
    pub num_dontcares: usize,
    /// Number of levels that contain at least one term
    pub num_levels: usize,
    /// Number of prime implicants covering at least one minterm
    pub num_primes: usize,
    /// Number of implicants in the minimal cover
    pub cover_size: usize,
    /// Number of literals in the minimal cover
    pub cover_literals: usize,
}

/// Result of [`Problem::minimize`], with the intermediate tables kept for
/// inspection
#[derive(Debug, Clone)]
pub struct Minimization {
    num_dontcares: usize,
    levels: Vec<Level>,
    table: CoverageTable,
    cover: Cover,
}

impl Minimization {
    /// Every merge level, level 0 first
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Prime implicants, in the order the cover search considered them
    pub fn primes(&self) -> &[Term] {
        self.table.primes()
    }

    /// Coverage of the minterms by the prime implicants
    pub fn table(&self) -> &CoverageTable {
        &self.table
    }

    /// The minimal cover
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Consume the result, keeping only the cover
    pub fn into_cover(self) -> Cover {
        self.cover
    }

    pub fn stats(&self) -> MinimizationStats {
        MinimizationStats {
            num_minterms: self.table.minterms().len(),
            num_dontcares: self.num_dontcares,
            num_levels: self.levels.iter().filter(|l| l.num_terms() > 0).count(),
            num_primes: self.table.primes().len(),
            cover_size: self.cover.len(),
            cover_literals: self.cover.literal_count(),
        }
    }
}

impl Problem {
    /// Compute a minimal sum-of-products cover
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Problem, QmConfig};
    ///
    /// # fn main() -> Result<(), qm_logic::QmError> {
    /// let problem = Problem::new(4, &[4, 8, 10, 11, 12, 15], &[9, 14])?;
    /// let result = problem.minimize(&QmConfig::default())?;
    ///
    /// assert_eq!(result.cover().len(), 3);
    /// assert!(result.cover().covers_all(problem.minterms()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(&self, config: &QmConfig) -> Result<Minimization, QmError> {
        if self.width() > config.max_variables {
            return Err(InputError::InvalidVariableCount {
                count: self.width() as i64,
                max: config.max_variables,
            }
            .into());
        }

        let mut generator = ImplicantGenerator::new(self.width(), self.minterms(), self.dontcares())
            .with_early_termination(config.early_termination);
        generator.generate();
        let primes = generator.prime_implicants();
        debug!("{} prime implicants", primes.len());

        let table = CoverageTable::new(self.width(), primes, generator.minterms().to_vec());
        let terms = CoverSolver::new()
            .with_max_depth(config.max_search_depth)
            .solve(&table)?;

        let result = Minimization {
            num_dontcares: self.dontcares().len(),
            levels: generator.levels().to_vec(),
            table,
            cover: Cover::new(self.width(), terms),
        };

        if config.summary {
            let stats = result.stats();
            info!(
                "{} minterms, {} don't-cares -> {} primes -> {} terms ({} literals)",
                stats.num_minterms,
                stats.num_dontcares,
                stats.num_primes,
                stats.cover_size,
                stats.cover_literals
            );
        }

        Ok(result)
    }
}
