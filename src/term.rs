//! Term types for Quine-McCluskey minimization
//!
//! This module provides the atomic unit of computation:
//! - [`TermStatus`]: Whether a term is still a prime candidate or has been merged
//! - [`Term`]: A fixed-width bit pattern with a wildcard mask
//! - [`TermDisplay`]: Width-aware rendering adapter for a [`Term`]

use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest number of variables a [`Term`] can represent
pub const MAX_VARIABLES: usize = u32::BITS as usize;

/// Merge status of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermStatus {
    /// Not (yet) subsumed by a more general implicant
    Prime,
    /// Took part in at least one successful merge
    Merged,
    /// Result of a failed merge; value and mask carry no meaning
    Invalid,
}

/// A partially specified input combination
///
/// `value` holds the defined bits and `mask` marks wildcard positions. Bits of
/// `value` under the mask are left as the merge produced them and must be
/// ignored when reading the value positionally.
///
/// Equality and hashing only consider `value` and `mask`.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    pub(crate) value: u32,
    pub(crate) mask: u32,
    pub(crate) weight: u32,
    pub(crate) status: TermStatus,
}

impl Term {
    /// Create an unmerged term for a single input combination
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Term, TermStatus};
    ///
    /// let t = Term::minterm(0b101);
    /// assert_eq!(t.weight(), 2);
    /// assert_eq!(t.mask(), 0);
    /// assert_eq!(t.status(), TermStatus::Prime);
    /// ```
    pub fn minterm(value: u32) -> Self {
        Term {
            value,
            mask: 0,
            weight: value.count_ones(),
            status: TermStatus::Prime,
        }
    }

    /// Raw value bits, including meaningless bits under the mask
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Wildcard positions
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Weight class this term was grouped under
    ///
    /// Computed once from the raw integer of the original term and never
    /// recomputed when the mask grows.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Current merge status
    pub fn status(&self) -> TermStatus {
        self.status
    }

    /// True while the term has not been merged into a larger implicant
    pub fn is_prime(&self) -> bool {
        self.status == TermStatus::Prime
    }

    /// True for the result of a failed merge
    pub fn is_invalid(&self) -> bool {
        self.status == TermStatus::Invalid
    }

    pub(crate) fn mark_merged(&mut self) {
        self.status = TermStatus::Merged;
    }

    /// Attempt to combine two terms into a more general one
    ///
    /// The terms must share the same mask and differ in exactly one value bit.
    /// On success the differing bit becomes a new wildcard and the result
    /// starts out as [`TermStatus::Prime`]. Otherwise the result is marked
    /// [`TermStatus::Invalid`].
    ///
    /// Marking the operands as merged is left to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Term;
    ///
    /// let merged = Term::minterm(0b00).merge(&Term::minterm(0b01));
    /// assert!(merged.is_prime());
    /// assert_eq!(merged.mask(), 0b01);
    /// assert_eq!(merged.pattern(2), "0-");
    ///
    /// assert!(Term::minterm(0b00).merge(&Term::minterm(0b11)).is_invalid());
    /// ```
    pub fn merge(&self, other: &Term) -> Term {
        let diff = self.value ^ other.value;
        if self.mask != other.mask || diff.count_ones() != 1 {
            return Term {
                value: self.value | other.value,
                mask: self.mask,
                weight: self.weight,
                status: TermStatus::Invalid,
            };
        }

        Term {
            value: self.value | other.value,
            mask: self.mask | diff,
            weight: self.weight.min(other.weight),
            status: TermStatus::Prime,
        }
    }

    /// Check whether this term covers `minterm`
    ///
    /// Every position outside this term's mask must agree with the minterm.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Term;
    ///
    /// let implicant = Term::minterm(0b00).merge(&Term::minterm(0b10));
    /// assert!(implicant.covers(&Term::minterm(0b00)));
    /// assert!(implicant.covers(&Term::minterm(0b10)));
    /// assert!(!implicant.covers(&Term::minterm(0b01)));
    /// ```
    pub fn covers(&self, minterm: &Term) -> bool {
        ((self.value ^ minterm.value) | self.mask) == self.mask
    }

    /// Number of fixed (non-wildcard) positions within `width` bits
    pub fn literal_count(&self, width: usize) -> usize {
        (width_mask(width) & !self.mask).count_ones() as usize
    }

    /// Render the bit pattern, most significant bit first
    pub fn pattern(&self, width: usize) -> String {
        (0..width)
            .rev()
            .map(|bit| self.position_char(bit))
            .collect()
    }

    /// Width-aware display adapter that also prints the status marker
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Term;
    ///
    /// assert_eq!(Term::minterm(0b0110).display(4).to_string(), "0110 *");
    /// ```
    pub fn display(&self, width: usize) -> TermDisplay<'_> {
        TermDisplay { term: self, width }
    }

    fn position_char(&self, bit: usize) -> char {
        if (self.mask >> bit) & 1 == 1 {
            '-'
        } else if (self.value >> bit) & 1 == 1 {
            '1'
        } else {
            '0'
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.mask == other.mask
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.mask.hash(state);
    }
}

/// Renders a [`Term`] as `<pattern> <marker>`
///
/// The marker is `*` for a term that is still prime and `m` otherwise.
pub struct TermDisplay<'a> {
    term: &'a Term,
    width: usize,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.term.is_prime() { '*' } else { 'm' };
        write!(f, "{} {}", self.term.pattern(self.width), marker)
    }
}

/// All-ones mask covering the low `width` bits
pub(crate) fn width_mask(width: usize) -> u32 {
    if width >= MAX_VARIABLES {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}
