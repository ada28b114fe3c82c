//! Tests for the implicant generator

use super::*;
use crate::term::TermStatus;

fn patterns(terms: &[Term], width: usize) -> Vec<String> {
    terms.iter().map(|t| t.pattern(width)).collect()
}

#[test]
fn test_level_zero_grouped_by_weight() {
    let generator = ImplicantGenerator::new(3, &[0, 3, 5, 1], &[7]);
    let level = &generator.levels()[0];
    assert_eq!(level.groups().len(), 4);
    assert_eq!(patterns(level.groups()[0].terms(), 3), ["000"]);
    assert_eq!(patterns(level.groups()[1].terms(), 3), ["001"]);
    assert_eq!(patterns(level.groups()[2].terms(), 3), ["011", "101"]);
    assert_eq!(patterns(level.groups()[3].terms(), 3), ["111"]);
}

#[test]
fn test_levels_allocated_per_width() {
    let generator = ImplicantGenerator::new(4, &[1], &[]);
    assert_eq!(generator.levels().len(), 5);
    for level in generator.levels() {
        assert_eq!(level.width(), 4);
        assert_eq!(level.groups().len(), 5);
    }
}

#[test]
fn test_two_variable_primes() {
    let mut generator = ImplicantGenerator::new(2, &[0, 1, 2], &[]);
    generator.generate();

    let level0 = &generator.levels()[0];
    assert!(level0.terms().all(|t| t.status() == TermStatus::Merged));

    let level1 = &generator.levels()[1];
    assert_eq!(patterns(level1.groups()[0].terms(), 2), ["0-", "-0"]);
    assert!(level1.terms().all(Term::is_prime));

    assert_eq!(patterns(&generator.prime_implicants(), 2), ["0-", "-0"]);
}

#[test]
fn test_single_variable_fully_merges() {
    let mut generator = ImplicantGenerator::new(1, &[0, 1], &[]);
    generator.generate();
    let primes = generator.prime_implicants();
    assert_eq!(primes.len(), 1);
    assert_eq!(primes[0].mask(), 0b1);
    assert_eq!(primes[0].pattern(1), "-");
}

#[test]
fn test_duplicate_merge_results_are_kept_once() {
    // 000,001,010,011 produce 0-- twice at level 2
    let mut generator = ImplicantGenerator::new(3, &[0, 1, 2, 3], &[]);
    generator.generate();
    let level2 = &generator.levels()[2];
    assert_eq!(level2.num_terms(), 1);
    assert_eq!(patterns(level2.groups()[0].terms(), 3), ["0--"]);
    assert_eq!(patterns(&generator.prime_implicants(), 3), ["0--"]);
}

#[test]
fn test_unmergeable_minterm_stays_prime() {
    let mut generator = ImplicantGenerator::new(3, &[0, 7], &[]);
    generator.generate();
    assert_eq!(patterns(&generator.prime_implicants(), 3), ["000", "111"]);
    assert_eq!(generator.levels()[1].num_terms(), 0);
}

#[test]
fn test_dontcare_only_implicants_are_filtered() {
    // 6 and 7 are don't-cares that merge with each other but cover no minterm
    let mut generator = ImplicantGenerator::new(3, &[0], &[6, 7]);
    generator.generate();
    assert_eq!(patterns(&generator.survivors(), 3), ["000", "11-"]);
    assert_eq!(patterns(&generator.prime_implicants(), 3), ["000"]);
}

#[test]
fn test_dontcares_enlarge_implicants() {
    let mut generator = ImplicantGenerator::new(2, &[0], &[1]);
    generator.generate();
    assert_eq!(patterns(&generator.prime_implicants(), 2), ["0-"]);
}

#[test]
fn test_classic_four_variable_example() {
    let mut generator = ImplicantGenerator::new(4, &[4, 8, 10, 11, 12, 15], &[9, 14]);
    generator.generate();
    let primes = patterns(&generator.prime_implicants(), 4);
    assert_eq!(primes.len(), 4);
    for expected in ["-100", "10--", "1--0", "1-1-"] {
        assert!(primes.iter().any(|p| p == expected), "missing {}", expected);
    }
}

#[test]
fn test_every_prime_covers_a_minterm() {
    let minterms = [4, 5, 6, 8, 9, 10, 13];
    let mut generator = ImplicantGenerator::new(4, &minterms, &[0, 7, 15]);
    generator.generate();
    for prime in generator.prime_implicants() {
        assert!(minterms.iter().any(|&m| prime.covers(&Term::minterm(m))));
    }
}

#[test]
fn test_early_termination_matches_full_sweep() {
    let minterms = [1, 3, 5, 7, 9, 11];
    let mut full = ImplicantGenerator::new(5, &minterms, &[]);
    full.generate();
    let mut early = ImplicantGenerator::new(5, &minterms, &[]).with_early_termination(true);
    early.generate();
    assert_eq!(full.prime_implicants(), early.prime_implicants());
    assert_eq!(full.levels(), early.levels());
}

#[test]
fn test_generate_is_idempotent() {
    let mut generator = ImplicantGenerator::new(3, &[0, 1, 2, 5], &[]);
    generator.generate();
    let first = generator.prime_implicants();
    generator.generate();
    assert_eq!(first, generator.prime_implicants());
}

#[test]
fn test_empty_input_has_no_primes() {
    let mut generator = ImplicantGenerator::new(2, &[], &[]);
    generator.generate();
    assert!(generator.prime_implicants().is_empty());
    assert!(generator.survivors().is_empty());
}

#[test]
#[should_panic(expected = "does not fit in 2 variables")]
fn test_value_wider_than_width_panics() {
    ImplicantGenerator::new(2, &[0b111], &[]);
}
