//! The Berlekamp-Massey algorithm for finding the error locator polynomial.
use alloc::{vec, vec::Vec};

use crate::error::{Error, Uncorrectable};
use crate::galois::Field;
use crate::poly;

#[cfg(test)]
use super::syndrome::{forney_syndromes, syndromes};
#[cfg(test)]
use crate::{encoding, galois::gf256};
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Compute the error locator polynomial (Sigma) from the syndromes.
///
/// `synd` may carry leading placeholder entries beyond `nsym`, they are
/// skipped. With `erasures` known erasures (already removed from `synd`,
/// see [forney_syndromes](super::syndrome::forney_syndromes)) only
/// `nsym - erasures` syndromes are used.
///
/// The result is `Sigma(x) = (1 - X_1 x) ... (1 - X_v x)` for the error
/// locations `X_j`, highest power first, so the last coefficient is 1.
/// Chien search expects the reversed polynomial, whose roots are the
/// locations themselves instead of their inverses.
pub fn error_locator(
    field: &Field,
    synd: &[u8],
    nsym: usize,
    erasures: usize,
) -> Result<Vec<u8>, Error> {
    let mut err_loc = vec![1]; // Sigma
    let mut old_loc = vec![1]; // Sigma before the last length change
    let shift = synd.len().saturating_sub(nsym);

    for i in 0..nsym.saturating_sub(erasures) {
        let k = i + shift;
        // discrepancy between the syndrome and the prediction by the current LFSR
        let delta = err_loc
            .iter()
            .rev()
            .skip(1)
            .zip(synd[..k].iter().rev())
            .fold(synd[k], |d, (l, s)| d ^ field.mul(*l, *s));

        // x * old_loc
        old_loc.push(0);

        if delta != 0 {
            if old_loc.len() > err_loc.len() {
                let new_loc = poly::scale(field, &old_loc, delta);
                old_loc = poly::scale(field, &err_loc, field.inverse(delta)?);
                err_loc = new_loc;
            }
            err_loc = poly::add(&err_loc, &poly::scale(field, &old_loc, delta));
        }
    }

    poly::strip_leading_zeros(&mut err_loc);
    let errors = err_loc.len().saturating_sub(1);
    if 2 * errors + erasures > nsym {
        tracing::debug!(errors, erasures, nsym, "error locator exceeds correction capacity");
        return Err(Uncorrectable::TooManyErrors {
            errors,
            erasures,
            ecc_symbols: nsym,
        }
        .into());
    }
    Ok(err_loc)
}

#[cfg(test)]
fn corrupted(field: &Field, message: &[u8], nsym: usize, positions: &[usize]) -> Vec<u8> {
    let g = encoding::generator_poly(field, nsym);
    let mut cw = message.to_vec();
    cw.extend(encoding::parity(field, message, &g).unwrap());
    for (i, p) in positions.iter().enumerate() {
        cw[*p] ^= 0x21 + i as u8;
    }
    cw
}

#[test]
fn locator_degree_matches_error_count() {
    let f = gf256();
    for count in 0..=3 {
        let positions: Vec<usize> = (0..count).map(|i| 2 * i + 1).collect();
        let cw = corrupted(&f, b"hello world", 6, &positions);
        let synd = syndromes(&f, &cw, 6);
        let fsynd = forney_syndromes(&f, &synd, &[], cw.len());
        let loc = error_locator(&f, &fsynd, 6, 0).unwrap();
        assert_eq!(loc.len(), count + 1);
        assert_eq!(*loc.last().unwrap(), 1);
    }
}

#[test]
fn locator_roots_are_inverse_locations() {
    let f = gf256();
    let positions = [0, 1, 2];
    let cw = corrupted(&f, b"hello world", 6, &positions);
    let synd = syndromes(&f, &cw, 6);
    let sigma = error_locator(&f, &synd[1..], 6, 0).unwrap();
    let mut reversed = sigma.clone();
    reversed.reverse();
    for p in positions {
        let x = f.alpha_pow((cw.len() - 1 - p) as i32);
        let x_inv = f.inverse(x).unwrap();
        assert_eq!(poly::eval(&f, &sigma, x_inv), 0);
        assert_eq!(poly::eval(&f, &reversed, x), 0);
    }
}

#[test]
fn shifted_syndromes() {
    // the placeholder in front is skipped
    let f = gf256();
    let cw = corrupted(&f, b"shift", 4, &[1]);
    let synd = syndromes(&f, &cw, 4);
    assert_eq!(
        error_locator(&f, &synd, 4, 0).unwrap(),
        error_locator(&f, &synd[1..], 4, 0).unwrap()
    );
}

#[test]
fn capacity_exceeded() {
    let f = gf256();
    // one error plus one erasure needs three parity symbols
    let synd = [1, 0];
    assert_eq!(
        error_locator(&f, &synd, 2, 1),
        Err(Error::Uncorrectable(Uncorrectable::TooManyErrors {
            errors: 1,
            erasures: 1,
            ecc_symbols: 2
        }))
    );
}
