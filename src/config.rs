//! Minimizer configuration

use crate::solver::DEFAULT_MAX_DEPTH;

/// Default cap on the number of variables accepted by [`Problem::minimize`]
///
/// [`Problem::minimize`]: crate::Problem::minimize
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Configuration for a minimization run
///
/// The method is exact and may take exponential time and memory, so the
/// defaults cap the problem size well below what a [`Term`] can represent.
/// Raise them deliberately for larger inputs.
///
/// # Examples
///
/// ```
/// use qm_logic::QmConfig;
///
/// let mut config = QmConfig::default();
/// config.max_variables = 20;        // Accept larger functions
/// config.early_termination = true;  // Skip rounds once nothing merges
/// ```
///
/// [`Term`]: crate::Term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmConfig {
    /// Largest accepted number of variables
    ///
    /// Problems above this are rejected with
    /// [`InputError::InvalidVariableCount`](crate::InputError::InvalidVariableCount).
    ///
    /// **Default:** `16`
    pub max_variables: usize,

    /// Largest number of nested branches during the cover search
    ///
    /// Essential primes are extracted without using up depth; only branching
    /// on a prime when no essential is left counts.
    ///
    /// **Default:** `1024`
    pub max_search_depth: usize,

    /// Stop generating levels once a round produces no merge
    ///
    /// Results are identical either way; only the trailing empty levels are
    /// skipped.
    ///
    /// **Default:** `false`
    pub early_termination: bool,

    /// Log summary statistics at `info` level when the run finishes
    ///
    /// **Default:** `false`
    pub summary: bool,
}

impl Default for QmConfig {
    fn default() -> Self {
        QmConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_search_depth: DEFAULT_MAX_DEPTH,
            early_termination: false,
            summary: false,
        }
    }
}

impl QmConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
