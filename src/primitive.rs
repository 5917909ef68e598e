//! Search for primitive polynomials.
//!
//! A polynomial of degree `m` is primitive if `x` generates all `2^m - 1`
//! non-zero elements of the field it defines. This is checked directly:
//! multiply by `x` again and again and look for an early repetition.
//!
//! The well-known polynomials (0x11D for 8 bits, for instance) can simply be
//! put into a [CodecConfig](crate::CodecConfig). The search is only
//! needed for unusual symbol sizes or if one wants to pick another field.
use alloc::{vec, vec::Vec};

use crate::galois::carryless_mul;

#[cfg(test)]
use pretty_assertions::assert_eq;

/// Symbol sizes the search supports.
const EXPONENTS: core::ops::RangeInclusive<u32> = 2..=16;

/// Which integers are tested as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    /// Every odd integer of degree `m`.
    Exhaustive,
    /// Only integers of degree `m` which are prime numbers.
    ///
    /// This is a cheap filter, not a criterion. It misses primitive
    /// polynomials such as 0x11D = 3 * 5 * 19.
    PrimesOnly,
}

/// All primes less than `limit`.
pub fn sieve_of_eratosthenes(limit: usize) -> Vec<usize> {
    let mut composite = vec![false; limit];
    let mut primes = Vec::new();
    for i in 2..limit {
        if composite[i] {
            continue;
        }
        primes.push(i);
        for k in (i * i..limit).step_by(i) {
            composite[k] = true;
        }
    }
    primes
}

/// Check if `poly` is a primitive polynomial of degree `exponent`.
pub fn is_primitive(poly: u32, exponent: u32) -> bool {
    if !EXPONENTS.contains(&exponent) || poly >> exponent != 1 {
        return false;
    }
    let field_size = (1usize << exponent) - 1;
    let mut seen = vec![false; field_size + 1];
    let mut x = 1;
    for _ in 0..field_size {
        x = carryless_mul(x, 2, poly, 1 << exponent);
        if x == 0 || x as usize > field_size || seen[x as usize] {
            return false;
        }
        seen[x as usize] = true;
    }
    true
}

/// All primitive polynomials of degree `exponent` among the `candidates`.
///
/// Returns an empty list for exponents outside `2..=16`.
pub fn find_primitive_polynomials(exponent: u32, candidates: Candidates) -> Vec<u32> {
    if !EXPONENTS.contains(&exponent) {
        return Vec::new();
    }
    let lower = 1u32 << exponent;
    let upper = 1u32 << (exponent + 1);
    let primitive = |p: &u32| is_primitive(*p, exponent);
    match candidates {
        Candidates::Exhaustive => (lower + 1..upper).step_by(2).filter(primitive).collect(),
        Candidates::PrimesOnly => sieve_of_eratosthenes(upper as usize)
            .into_iter()
            .map(|p| p as u32)
            .filter(|p| *p > lower)
            .filter(primitive)
            .collect(),
    }
}

/// The smallest primitive polynomial of degree `exponent`.
pub fn first_primitive_polynomial(exponent: u32) -> Option<u32> {
    if !EXPONENTS.contains(&exponent) {
        return None;
    }
    let lower = 1u32 << exponent;
    (lower + 1..lower << 1)
        .step_by(2)
        .find(|p| is_primitive(*p, exponent))
}

#[test]
fn test_sieve() {
    assert_eq!(sieve_of_eratosthenes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    assert!(sieve_of_eratosthenes(2).is_empty());
}

#[test]
fn test_gf256_polynomials() {
    let all = find_primitive_polynomials(8, Candidates::Exhaustive);
    // phi(255) / 8
    assert_eq!(all.len(), 16);
    assert!(all.contains(&0x11d));
    assert!(all.contains(&0x12d));
    assert!(!all.contains(&0x11b));
    assert_eq!(first_primitive_polynomial(8), Some(0x11d));
}

#[test]
fn test_primes_only_is_subset() {
    let all = find_primitive_polynomials(8, Candidates::PrimesOnly);
    assert!(!all.is_empty());
    assert!(!all.contains(&0x11d));
    let exhaustive = find_primitive_polynomials(8, Candidates::Exhaustive);
    for p in all {
        assert!(exhaustive.contains(&p));
    }
}

#[test]
fn test_small_degrees() {
    assert_eq!(find_primitive_polynomials(2, Candidates::Exhaustive), vec![0b111]);
    assert_eq!(find_primitive_polynomials(3, Candidates::Exhaustive), vec![0b1011, 0b1101]);
    assert_eq!(first_primitive_polynomial(4), Some(0x13));
    assert!(find_primitive_polynomials(1, Candidates::Exhaustive).is_empty());
    assert_eq!(first_primitive_polynomial(17), None);
}

#[test]
fn test_is_primitive_agrees_with_field() {
    use crate::galois::Field;

    for p in 0x101..0x200u32 {
        let field_ok = Field::new(p as u16, 255).is_ok();
        assert_eq!(field_ok, is_primitive(p, 8), "polynomial {:#x}", p);
    }
}
