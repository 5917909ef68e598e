//! Syndrome computation.
use alloc::vec::Vec;

use crate::galois::Field;
use crate::poly;

#[cfg(test)]
use crate::{encoding, galois::gf256};
#[cfg(test)]
use alloc::vec;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Evaluate `received` at `alpha^0, ..., alpha^(nsym-1)`.
///
/// The result has `nsym + 1` entries. The first one is always 0 so that
/// index `i + 1` holds the evaluation at `alpha^i`; the error evaluator
/// computation relies on this layout.
pub fn syndromes(field: &Field, received: &[u8], nsym: usize) -> Vec<u8> {
    let mut synd = Vec::with_capacity(nsym + 1);
    synd.push(0);
    synd.extend(
        field
            .alpha_powers()
            .take(nsym)
            .map(|x| poly::eval(field, received, x)),
    );
    synd
}

/// No error was detected if all syndromes are zero.
pub fn all_zero(synd: &[u8]) -> bool {
    synd.iter().all(|s| *s == 0)
}

/// Remove the contribution of the known `erasures` from the syndromes.
///
/// The result has `nsym` entries (the placeholder is dropped), of which the
/// first `nsym - erasures.len()` only depend on the unknown errors. Erasure
/// positions count from the start of a codeword of length `len`.
///
/// # Panics
///
/// If an erasure position is not below `len`.
pub fn forney_syndromes(field: &Field, synd: &[u8], erasures: &[usize], len: usize) -> Vec<u8> {
    let mut fsynd = synd.get(1..).map(<[u8]>::to_vec).unwrap_or_default();
    for pos in erasures {
        assert!(*pos < len, "erasure {} outside of codeword of length {}", pos, len);
        let x = field.alpha_pow((len - 1 - pos) as i32);
        for j in 0..fsynd.len().saturating_sub(1) {
            fsynd[j] = field.mul(fsynd[j], x) ^ fsynd[j + 1];
        }
    }
    fsynd
}

#[cfg(test)]
fn codeword(field: &Field, message: &[u8], nsym: usize) -> Vec<u8> {
    let g = encoding::generator_poly(field, nsym);
    let mut cw = message.to_vec();
    cw.extend(encoding::parity(field, message, &g).unwrap());
    cw
}

#[test]
fn valid_codeword_has_zero_syndromes() {
    let f = gf256();
    let cw = codeword(&f, b"hello world", 6);
    let synd = syndromes(&f, &cw, 6);
    assert_eq!(synd.len(), 7);
    assert!(all_zero(&synd));
}

#[test]
fn single_error_syndromes() {
    let f = gf256();
    let mut cw = codeword(&f, b"syndrome", 4);
    let pos = 3;
    let magnitude = 0x5a;
    cw[pos] ^= magnitude;
    let synd = syndromes(&f, &cw, 4);
    assert_eq!(synd[0], 0);
    let degree = (cw.len() - 1 - pos) as i32;
    for i in 0..4 {
        let expected = f.mul(magnitude, f.alpha_pow(i * degree));
        assert_eq!(synd[i as usize + 1], expected);
    }
}

#[test]
fn forney_syndromes_without_erasures() {
    let f = gf256();
    let synd = [0, 4, 9, 200, 1];
    assert_eq!(forney_syndromes(&f, &synd, &[], 12), vec![4, 9, 200, 1]);
    assert!(forney_syndromes(&f, &[], &[], 12).is_empty());
}

#[test]
fn forney_syndromes_cancel_erasure() {
    let f = gf256();
    let mut cw = codeword(&f, b"erasure", 6);
    let len = cw.len();
    cw[2] ^= 0x11;
    let synd = syndromes(&f, &cw, 6);
    assert!(!all_zero(&synd));
    let fsynd = forney_syndromes(&f, &synd, &[2], len);
    // with the only defect declared as erasure, nothing is left for the error locator
    assert!(all_zero(&fsynd[..5]));
}

#[test]
#[should_panic]
fn forney_syndromes_reject_erasure_outside_codeword() {
    let f = gf256();
    forney_syndromes(&f, &[0, 1, 2], &[3], 3);
}
