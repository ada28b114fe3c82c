//! Minterm/implicant coverage matrix

use crate::term::Term;

/// Boolean matrix recording which prime implicants cover which minterms
///
/// Rows follow `minterms`, columns follow `primes`. The table is a pure
/// function of its two input sequences and is rebuilt, never mutated, as the
/// cover search reduces it.
///
/// # Examples
///
/// ```
/// use qm_logic::{CoverageTable, Term};
///
/// let zero_dash = Term::minterm(0b00).merge(&Term::minterm(0b01));
/// let dash_zero = Term::minterm(0b00).merge(&Term::minterm(0b10));
/// let minterms = [0, 1, 2].map(Term::minterm).to_vec();
///
/// let table = CoverageTable::new(2, vec![zero_dash, dash_zero], minterms);
/// assert!(table.covers(0, 0) && table.covers(0, 1));
/// assert_eq!(table.essential_column(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTable {
    width: usize,
    primes: Vec<Term>,
    minterms: Vec<Term>,
    covers: Vec<Vec<bool>>,
}

impl CoverageTable {
    /// Build the matrix for `primes` against `minterms`
    pub fn new(width: usize, primes: Vec<Term>, minterms: Vec<Term>) -> Self {
        let covers = minterms
            .iter()
            .map(|m| primes.iter().map(|p| p.covers(m)).collect())
            .collect();
        CoverageTable {
            width,
            primes,
            minterms,
            covers,
        }
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Column headers
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    /// Row headers
    pub fn minterms(&self) -> &[Term] {
        &self.minterms
    }

    /// True when no minterm is left to cover
    pub fn is_empty(&self) -> bool {
        self.minterms.is_empty()
    }

    /// Whether `primes[col]` covers `minterms[row]`
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.covers[row][col]
    }

    /// Coverage flags of one minterm, one per prime
    pub fn row(&self, row: usize) -> &[bool] {
        &self.covers[row]
    }

    /// Iterate over rows in minterm order
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.covers.iter().map(Vec::as_slice)
    }

    /// Column of the prime that is the sole cover of some minterm
    ///
    /// Rows are scanned in minterm order and the first row with exactly one
    /// covering prime decides.
    pub fn essential_column(&self) -> Option<usize> {
        self.covers.iter().find_map(|row| {
            let mut covering = row.iter().enumerate().filter(|&(_, &c)| c);
            match (covering.next(), covering.next()) {
                (Some((col, _)), None) => Some(col),
                _ => None,
            }
        })
    }

    /// Columns of every essential prime, in the order repeated calls to
    /// [`essential_column`](Self::essential_column) would extract them
    ///
    /// Removing an essential prime only drops rows it covers, so the
    /// remaining rows keep their covering counts and a single scan finds the
    /// same sequence. A row already covered by an earlier pick is skipped.
    pub fn essential_columns(&self) -> Vec<usize> {
        let mut picked: Vec<usize> = Vec::new();
        for row in &self.covers {
            if picked.iter().any(|&col| row[col]) {
                continue;
            }
            let mut covering = row.iter().enumerate().filter(|&(_, &c)| c);
            if let (Some((col, _)), None) = (covering.next(), covering.next()) {
                picked.push(col);
            }
        }
        picked
    }

    /// Index of the first minterm that no prime covers
    pub fn uncovered_row(&self) -> Option<usize> {
        self.covers.iter().position(|row| !row.contains(&true))
    }

    /// Rebuild the table with `primes[col]` removed along with every minterm
    /// it covers
    pub fn without_prime(&self, col: usize) -> CoverageTable {
        let removed = self.primes[col];
        let minterms = self
            .minterms
            .iter()
            .filter(|m| !removed.covers(m))
            .copied()
            .collect();
        let primes = self
            .primes
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != col)
            .map(|(_, p)| *p)
            .collect();
        CoverageTable::new(self.width, primes, minterms)
    }

    /// Rebuild the table with every listed prime removed along with the
    /// minterms any of them covers
    pub fn without_primes(&self, cols: &[usize]) -> CoverageTable {
        let minterms = self
            .minterms
            .iter()
            .zip(&self.covers)
            .filter(|(_, row)| !cols.iter().any(|&col| row[col]))
            .map(|(m, _)| *m)
            .collect();
        let primes = self
            .primes
            .iter()
            .enumerate()
            .filter(|(i, _)| !cols.contains(i))
            .map(|(_, p)| *p)
            .collect();
        CoverageTable::new(self.width, primes, minterms)
    }
}
