//! Prime implicant generation
//!
//! This module provides the merge sweep of the Quine-McCluskey method. Terms
//! are organised into [`Level`]s (one per merge round), each holding one
//! [`Group`] per weight class. Terms in adjacent groups are merged pairwise and
//! the results feed the next level, until no more generalization is possible.

#[cfg(test)]
mod tests;

use crate::term::Term;
use log::{debug, trace};
use std::collections::HashSet;

/// Ordered collection of terms sharing one weight class within a level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    terms: Vec<Term>,
}

impl Group {
    /// Terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One merge round: a group per weight class `0..=width`
///
/// Level 0 holds the original minterms and don't-cares. Level `k` holds terms
/// built from `2^k` original terms, filed under the weight class of the lower
/// group they were merged from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    width: usize,
    groups: Vec<Group>,
}

impl Level {
    fn new(width: usize) -> Self {
        Level {
            width,
            groups: vec![Group::default(); width + 1],
        }
    }

    /// Number of variables of the terms in this level
    pub fn width(&self) -> usize {
        self.width
    }

    /// Groups ordered by weight class
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate over every term of the level, group by group
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.groups.iter().flat_map(|g| g.terms.iter())
    }

    /// Total number of terms across all groups
    pub fn num_terms(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Derives the prime implicants of a function by iterative pairwise merging
///
/// # Examples
///
/// ```
/// use qm_logic::ImplicantGenerator;
///
/// let mut generator = ImplicantGenerator::new(2, &[0, 1, 2], &[]);
/// generator.generate();
///
/// let primes: Vec<String> = generator
///     .prime_implicants()
///     .iter()
///     .map(|t| t.pattern(2))
///     .collect();
/// assert_eq!(primes, ["0-", "-0"]);
/// ```
#[derive(Debug, Clone)]
pub struct ImplicantGenerator {
    width: usize,
    minterms: Vec<Term>,
    levels: Vec<Level>,
    early_termination: bool,
    generated: bool,
}

impl ImplicantGenerator {
    /// Load minterms and don't-cares into level 0
    ///
    /// Values are grouped by their number of set bits. Callers are expected to
    /// pass values that fit in `width` bits; see [`Problem`] for a validated
    /// entry point.
    ///
    /// # Panics
    ///
    /// Panics if a value has more than `width` bits set, since it has no
    /// weight class to be filed under.
    ///
    /// [`Problem`]: crate::Problem
    pub fn new(width: usize, minterms: &[u32], dontcares: &[u32]) -> Self {
        let mut levels: Vec<Level> = (0..=width).map(|_| Level::new(width)).collect();

        let minterms: Vec<Term> = minterms.iter().map(|&v| Term::minterm(v)).collect();
        let dontcares = dontcares.iter().map(|&v| Term::minterm(v));
        for term in minterms.iter().copied().chain(dontcares) {
            assert!(
                term.weight as usize <= width,
                "value {} does not fit in {} variables",
                term.value,
                width
            );
            levels[0].groups[term.weight as usize].terms.push(term);
        }

        ImplicantGenerator {
            width,
            minterms,
            levels,
            early_termination: false,
            generated: false,
        }
    }

    /// Stop once a level produces no merge
    ///
    /// This only skips rounds that could not change anything; the remaining
    /// levels are left empty.
    pub fn with_early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Run the merge sweep over all levels
    ///
    /// Calling this more than once has no further effect.
    pub fn generate(&mut self) {
        if self.generated {
            return;
        }
        self.generated = true;

        for from in 0..self.width {
            let merges = self.construct_level(from);
            debug!(
                "level {} -> {}: {} merges, {} new terms",
                from,
                from + 1,
                merges,
                self.levels[from + 1].num_terms()
            );
            if merges == 0 && self.early_termination {
                break;
            }
        }
    }

    /// Merge level `from` into level `from + 1`, returning the number of
    /// successful merges
    fn construct_level(&mut self, from: usize) -> usize {
        let mut staged: Vec<(usize, usize)> = Vec::new();
        let mut next = Level::new(self.width);
        let mut seen: Vec<HashSet<(u32, u32)>> = vec![HashSet::new(); next.groups.len()];

        let groups = &self.levels[from].groups;
        for class in 0..groups.len().saturating_sub(1) {
            for (i, u) in groups[class].terms.iter().enumerate() {
                for (j, v) in groups[class + 1].terms.iter().enumerate() {
                    let merged = u.merge(v);
                    if merged.is_invalid() {
                        continue;
                    }
                    trace!(
                        "merge {} + {} -> {}",
                        u.pattern(self.width),
                        v.pattern(self.width),
                        merged.pattern(self.width)
                    );
                    staged.push((class, i));
                    staged.push((class + 1, j));
                    if seen[class].insert((merged.value, merged.mask)) {
                        next.groups[class].terms.push(merged);
                    }
                }
            }
        }

        let level = &mut self.levels[from];
        for &(class, index) in &staged {
            level.groups[class].terms[index].mark_merged();
        }
        self.levels[from + 1] = next;

        staged.len() / 2
    }

    /// All levels, level 0 first
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Original minterms, in input order
    pub fn minterms(&self) -> &[Term] {
        &self.minterms
    }

    /// Every term left unmerged after the sweep, in level, group and
    /// insertion order
    ///
    /// This includes implicants built solely from don't-cares.
    pub fn survivors(&self) -> Vec<Term> {
        self.levels
            .iter()
            .flat_map(Level::terms)
            .filter(|t| t.is_prime())
            .copied()
            .collect()
    }

    /// Prime implicants that cover at least one original minterm
    ///
    /// Order follows [`survivors`](Self::survivors), which the cover search
    /// relies on for tie-breaking.
    pub fn prime_implicants(&self) -> Vec<Term> {
        self.survivors()
            .into_iter()
            .filter(|p| self.minterms.iter().any(|m| p.covers(m)))
            .collect()
    }
}
