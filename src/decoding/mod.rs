//! Syndrome based error and erasure correction.
//!
//! The decoder is made of four main steps:
//!
//! 1. Compute the syndrome values. If all are zero, the codeword is valid.
//! 2. Compute the error locator polynomial with the Berlekamp-Massey algorithm.
//!    Known erasures are removed from the syndromes first (Forney syndromes),
//!    so that only the unknown errors are located.
//! 3. Compute the error locations with a Chien search.
//! 4. Compute the error values with Forney's algorithm and correct them.
//!
//! The corrected codeword is checked once more. Beyond the correction
//! capacity the steps above can produce a "correction" to some other
//! codeword or to no codeword at all; the final check catches the latter.
mod berlekamp_massey;
mod forney;
mod syndrome;

pub use berlekamp_massey::error_locator;
pub use forney::{correct_errata, errata_locator, error_evaluator};
pub use syndrome::{all_zero, forney_syndromes, syndromes};

use alloc::vec::Vec;

use crate::error::{Error, Uncorrectable};
use crate::galois::Field;
use crate::poly;

#[cfg(test)]
use crate::{encoding, galois::gf256};
#[cfg(test)]
use alloc::vec;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Find the zeros of the (reversed) error locator among the first `len`
/// powers of alpha.
///
/// A zero at `alpha^i` is an error at position `len - 1 - i`, counted from
/// the start of the codeword. Positions are returned in the order found,
/// i.e., descending.
pub fn chien_search(field: &Field, err_loc: &[u8], len: usize) -> Vec<usize> {
    field
        .alpha_powers()
        .take(len)
        .enumerate()
        .filter(|(_, x)| poly::eval(field, err_loc, *x) == 0)
        .map(|(i, _)| len - 1 - i)
        .collect()
}

/// Run the Chien search and check that every root was found.
///
/// A locator of degree `v` must have exactly `v` distinct roots inside the
/// codeword, anything else means there were too many errors.
pub fn find_errors(field: &Field, err_loc: &[u8], len: usize) -> Result<Vec<usize>, Error> {
    let expected = err_loc.len().saturating_sub(1);
    let positions = chien_search(field, err_loc, len);
    if positions.len() != expected {
        tracing::debug!(expected, found = positions.len(), "chien search failed");
        return Err(Uncorrectable::RootCountMismatch {
            expected,
            found: positions.len(),
        }
        .into());
    }
    Ok(positions)
}

/// Correct the `received` codeword protected by `nsym` parity symbols.
///
/// The `erasures` are positions inside the codeword, duplicates count once.
/// Returns the corrected codeword.
pub fn correct(
    field: &Field,
    received: &[u8],
    nsym: usize,
    erasures: &[usize],
) -> Result<Vec<u8>, Error> {
    let mut erasures = erasures.to_vec();
    erasures.sort_unstable();
    erasures.dedup();
    if let Some(position) = erasures.iter().find(|p| **p >= received.len()) {
        return Err(Error::ErasureOutOfRange {
            position: *position,
            len: received.len(),
        });
    }
    if erasures.len() > nsym {
        return Err(Uncorrectable::TooManyErasures {
            erasures: erasures.len(),
            ecc_symbols: nsym,
        }
        .into());
    }

    let mut word = received.to_vec();
    for pos in &erasures {
        word[*pos] = 0;
    }

    let synd = syndromes(field, &word, nsym);
    tracing::trace!(?synd, "syndromes");
    if all_zero(&synd) {
        return Ok(word);
    }

    let fsynd = forney_syndromes(field, &synd, &erasures, word.len());
    let mut err_loc = error_locator(field, &fsynd, nsym, erasures.len())?;
    err_loc.reverse();
    tracing::trace!(?err_loc, "error locator");

    let err_pos = find_errors(field, &err_loc, word.len())?;
    tracing::debug!(?err_pos, ?erasures, "located errata");

    let mut errata = erasures;
    errata.extend(err_pos);
    let corrected = correct_errata(field, &word, &synd, &errata)?;

    verify(field, &corrected, nsym)?;
    Ok(corrected)
}

/// Final check of a corrected codeword.
///
/// For a locator of degree `v <= nsym / 2` with `v` distinct roots inside the
/// codeword, the Forney values reproduce all syndromes, so this does not fire
/// after the checks in [find_errors] and [correct_errata] passed. A word that
/// is not a codeword is never returned.
fn verify(field: &Field, word: &[u8], nsym: usize) -> Result<(), Error> {
    if !all_zero(&syndromes(field, word, nsym)) {
        tracing::debug!("syndromes non-zero after correction");
        return Err(Uncorrectable::ResidualSyndrome.into());
    }
    Ok(())
}

#[cfg(test)]
fn codeword(field: &Field, message: &[u8], nsym: usize) -> Vec<u8> {
    let g = encoding::generator_poly(field, nsym);
    let mut cw = message.to_vec();
    cw.extend(encoding::parity(field, message, &g).unwrap());
    cw
}

#[test]
fn test_chien_search() {
    let f = gf256();
    let len = 10;
    // roots alpha^2 and alpha^7 belong to positions 7 and 2
    let loc = poly::mul(&f, &[1, f.alpha_pow(2)], &[1, f.alpha_pow(7)]);
    assert_eq!(chien_search(&f, &loc, len), vec![7, 2]);
    assert_eq!(find_errors(&f, &loc, len), Ok(vec![7, 2]));
    // alpha^12 is outside of a codeword with 10 symbols
    let loc = poly::mul(&f, &[1, f.alpha_pow(2)], &[1, f.alpha_pow(12)]);
    assert_eq!(
        find_errors(&f, &loc, len),
        Err(Error::Uncorrectable(Uncorrectable::RootCountMismatch {
            expected: 2,
            found: 1
        }))
    );
}

#[test]
fn test_recovery() {
    let f = gf256();
    let data = codeword(&f, &[1, 2, 3], 5);
    let mut received = data.clone();
    // make two wrong
    received[0] = 230;
    received[3 + 5 - 1] = 32;
    assert_eq!(correct(&f, &received, 5, &[]).unwrap(), data);
}

#[test]
fn test_recovery_hello_world() {
    let f = gf256();
    let data = codeword(&f, b"hello world", 6);
    let mut received = data.clone();
    received[0] = 20;
    received[1] = 0;
    received[2] = 3;
    assert_eq!(correct(&f, &received, 6, &[]).unwrap(), data);
}

#[test]
fn test_recovery_errors_and_erasures() {
    let f = gf256();
    let data = codeword(&f, b"errors and erasures", 8);
    let mut received = data.clone();
    // 2 errors + 4 erasures = 8 parity symbols
    received[1] ^= 0x40;
    received[20] ^= 0x01;
    for pos in [0, 5, 9, 26] {
        received[pos] = 0xff;
    }
    assert_eq!(correct(&f, &received, 8, &[0, 5, 9, 26]).unwrap(), data);
}

#[test]
fn test_recovery_erasures_only() {
    let f = gf256();
    let data = codeword(&f, b"erasures", 4);
    let mut received = data.clone();
    let erasures = [0, 2, 7, 11];
    for pos in erasures {
        received[pos] = 0;
    }
    assert_eq!(correct(&f, &received, 4, &erasures).unwrap(), data);
}

#[test]
fn test_too_many_errors() {
    let f = gf256();
    let data = codeword(&f, b"hello world", 4);
    let mut received = data.clone();
    for pos in [0, 3, 6, 9, 12] {
        received[pos] ^= 0xa5;
    }
    match correct(&f, &received, 4, &[]) {
        // miscorrection into another codeword is possible, but never to the original
        Ok(other) => assert_ne!(other, data),
        Err(e) => assert!(e.is_uncorrectable()),
    }
}

#[test]
fn test_erasures_are_validated() {
    let f = gf256();
    let data = codeword(&f, &[1, 2, 3], 2);
    assert_eq!(
        correct(&f, &data[..3], 2, &[5]),
        Err(Error::ErasureOutOfRange {
            position: 5,
            len: 3
        })
    );
    assert_eq!(
        correct(&f, &data, 2, &[0, 1, 4]),
        Err(Error::Uncorrectable(Uncorrectable::TooManyErasures {
            erasures: 3,
            ecc_symbols: 2
        }))
    );
    let mut received = data.clone();
    received[4] = 0x77;
    assert_eq!(correct(&f, &received, 2, &[4, 4, 4]).unwrap(), data);
}

#[test]
fn test_verify_rejects_wrong_errata() {
    let f = gf256();
    let data = codeword(&f, b"verify", 4);
    assert_eq!(verify(&f, &data, 4), Ok(()));

    let mut received = data.clone();
    received[3] ^= 0x21;
    // Forney values for the wrong position leave position 3 damaged
    let synd = syndromes(&f, &received, 4);
    let repaired = correct_errata(&f, &received, &synd, &[5]).unwrap();
    assert_ne!(repaired, data);
    assert_eq!(
        verify(&f, &repaired, 4),
        Err(Error::Uncorrectable(Uncorrectable::ResidualSyndrome))
    );
}
