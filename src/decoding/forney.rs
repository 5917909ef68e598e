//! Error values with Forney's algorithm.
//!
//! Once the positions of all errata (errors and erasures) are known, the
//! value of each error follows in closed form from the error evaluator
//! polynomial `Omega` and the errata locator `Lambda`:
//!
//! ```text
//!     e_i = X_i * Omega(X_i^-1) / prod_{j != i} (1 - X_i^-1 X_j)
//! ```
//!
//! where `X_i` is the location of the i-th error as a power of alpha. The
//! denominator is the formal derivative of `Lambda` at `X_i^-1`, written
//! out as a product.
use alloc::{vec, vec::Vec};

use crate::error::{Error, Uncorrectable};
use crate::galois::Field;
use crate::poly;

#[cfg(test)]
use super::syndrome::syndromes;
#[cfg(test)]
use crate::{encoding, galois::gf256};
#[cfg(test)]
use pretty_assertions::assert_eq;

/// The errata locator `prod (1 + alpha^p x)` for the coefficient degrees `coef_pos`.
pub fn errata_locator(field: &Field, coef_pos: &[usize]) -> Vec<u8> {
    coef_pos.iter().fold(vec![1], |loc, p| {
        let factor = poly::add(&[1], &[field.alpha_pow(*p as i32), 0]);
        poly::mul(field, &loc, &factor)
    })
}

/// The error evaluator `Omega(x) = S(x) Lambda(x) mod x^(nsym + 1)`.
///
/// `synd` must be given highest power first.
pub fn error_evaluator(
    field: &Field,
    synd: &[u8],
    errata_loc: &[u8],
    nsym: usize,
) -> Result<Vec<u8>, Error> {
    let mut modulus = vec![0; nsym + 2];
    modulus[0] = 1;
    let (_, remainder) = poly::div(field, &poly::mul(field, synd, errata_loc), &modulus)?;
    Ok(remainder)
}

/// Repair `received` at the errata `positions`.
///
/// `synd` are the syndromes of `received` including the leading placeholder,
/// as returned by [syndromes](super::syndrome::syndromes). Positions count
/// from the start of the codeword.
pub fn correct_errata(
    field: &Field,
    received: &[u8],
    synd: &[u8],
    positions: &[usize],
) -> Result<Vec<u8>, Error> {
    let len = received.len();
    let coef_pos: Vec<usize> = positions.iter().map(|p| len - 1 - p).collect();
    let errata_loc = errata_locator(field, &coef_pos);

    let reversed: Vec<u8> = synd.iter().rev().cloned().collect();
    let err_eval = error_evaluator(field, &reversed, &errata_loc, errata_loc.len() - 1)?;

    // X_i = alpha^(c_i - n) = alpha^c_i
    let locations: Vec<u8> = coef_pos
        .iter()
        .map(|c| field.alpha_pow(*c as i32 - field.size() as i32))
        .collect();

    let mut magnitudes = vec![0; len];
    for (i, (xi, pos)) in locations.iter().zip(positions).enumerate() {
        let xi_inv = field.inverse(*xi)?;

        let denominator = locations
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(1, |acc, (_, xj)| {
                field.mul(acc, Field::sub(1, field.mul(xi_inv, *xj)))
            });
        if denominator == 0 {
            return Err(Uncorrectable::DegenerateErrorValue { position: *pos }.into());
        }

        let y = field.mul(*xi, poly::eval(field, &err_eval, xi_inv));
        magnitudes[*pos] = field.div(y, denominator)?;
    }

    Ok(poly::add(received, &magnitudes))
}

#[cfg(test)]
fn codeword(field: &Field, message: &[u8], nsym: usize) -> Vec<u8> {
    let g = encoding::generator_poly(field, nsym);
    let mut cw = message.to_vec();
    cw.extend(encoding::parity(field, message, &g).unwrap());
    cw
}

#[test]
fn test_errata_locator() {
    let f = gf256();
    assert_eq!(errata_locator(&f, &[]), vec![1]);
    assert_eq!(errata_locator(&f, &[1]), vec![2, 1]);
    // (2x + 1)(4x + 1) = 8x^2 + 6x + 1
    assert_eq!(errata_locator(&f, &[1, 2]), vec![8, 6, 1]);
}

#[test]
fn known_positions_are_repaired() {
    let f = gf256();
    let original = codeword(&f, b"forney", 4);
    let mut received = original.clone();
    received[3] ^= 0x77;
    received[5] = 0;
    let synd = syndromes(&f, &received, 4);
    let repaired = correct_errata(&f, &received, &synd, &[3, 5]).unwrap();
    assert_eq!(repaired, original);
}

#[test]
fn repeated_position_is_degenerate() {
    let f = gf256();
    let mut received = codeword(&f, b"forney", 4);
    received[2] ^= 1;
    let synd = syndromes(&f, &received, 4);
    assert_eq!(
        correct_errata(&f, &received, &synd, &[2, 2]),
        Err(Error::Uncorrectable(
            Uncorrectable::DegenerateErrorValue { position: 2 }
        ))
    );
}
