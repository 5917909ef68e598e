//! Computation of the parity symbols.
//!
//! The code is _systematic_: a codeword is the message itself followed by
//! `nsym` parity symbols. Let `m(x)` be the message polynomial and `g(x)` the
//! generator polynomial of degree `nsym`. Polynomial division gives a
//! quotient `q` and a remainder `r` with
//!
//! ```text
//!     m(x) * x^nsym = q(x) g(x) + r(x).
//! ```
//!
//! The parity is `-r(x) = r(x)`, since then `m(x) * x^nsym - r(x)` is a
//! multiple of `g`. Every valid codeword therefore vanishes at the roots of
//! `g`, which is what the decoder checks.
use alloc::{vec, vec::Vec};

use crate::error::Error;
use crate::galois::Field;
use crate::poly;

#[cfg(test)]
use crate::galois::gf256;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// The generator polynomial `(x - alpha^0) (x - alpha^1) ... (x - alpha^(nsym-1))`.
///
/// It is monic and has `nsym + 1` coefficients.
pub fn generator_poly(field: &Field, nsym: usize) -> Vec<u8> {
    let mut g = vec![1];
    for i in 0..nsym {
        g = poly::mul(field, &g, &[1, field.alpha_pow(i as i32)]);
    }
    g
}

/// Compute the `generator.len() - 1` parity symbols for `message`.
pub fn parity(field: &Field, message: &[u8], generator: &[u8]) -> Result<Vec<u8>, Error> {
    let nsym = generator.len().saturating_sub(1);
    let mut padded = Vec::with_capacity(message.len() + nsym);
    padded.extend_from_slice(message);
    padded.resize(message.len() + nsym, 0);
    let (_, remainder) = poly::div(field, &padded, generator)?;
    Ok(remainder)
}

#[test]
fn generator_roots() {
    let f = gf256();
    let g = generator_poly(&f, 6);
    assert_eq!(g.len(), 7);
    assert_eq!(g[0], 1);
    for i in 0..6 {
        assert_eq!(poly::eval(&f, &g, f.alpha_pow(i)), 0);
    }
    assert_ne!(poly::eval(&f, &g, f.alpha_pow(6)), 0);
    assert_eq!(g, generator_poly(&f, 6));
}

#[test]
fn generator_small() {
    let f = gf256();
    assert_eq!(generator_poly(&f, 0), vec![1]);
    // (x + 1)(x + 2)
    assert_eq!(generator_poly(&f, 2), vec![1, 3, 2]);
}

#[test]
fn parity_qr_hello_world() {
    let f = gf256();
    let message = [
        0x40, 0xd2, 0x75, 0x47, 0x76, 0x17, 0x32, 0x06, 0x27, 0x26, 0x96, 0xc6, 0xc6, 0x96, 0x70,
        0xec,
    ];
    let g = generator_poly(&f, 10);
    let ecc = parity(&f, &message, &g).unwrap();
    assert_eq!(
        ecc,
        vec![0xbc, 0x2a, 0x90, 0x13, 0x6b, 0xaf, 0xef, 0xfd, 0x4b, 0xe0]
    );
}

#[test]
fn parity_makes_multiple_of_generator() {
    let f = gf256();
    let g = generator_poly(&f, 4);
    let mut codeword = b"parity".to_vec();
    let ecc = parity(&f, &codeword, &g).unwrap();
    codeword.extend_from_slice(&ecc);
    let (_, remainder) = poly::div(&f, &codeword, &g).unwrap();
    assert_eq!(remainder, vec![0; 4]);
}
