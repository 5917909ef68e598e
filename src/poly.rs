//! Polynomials over a [Field].
//!
//! A polynomial is a slice of coefficients with the highest power first,
//! so `[1, 0, 5]` is `x^2 + 5`. Leading zeros are allowed in intermediate
//! results; [strip_leading_zeros] brings a polynomial into canonical form.
use alloc::{vec, vec::Vec};

use crate::error::Error;
use crate::galois::Field;

#[cfg(test)]
use crate::galois::gf256;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Multiply every coefficient with the scalar `s`.
pub fn scale(field: &Field, p: &[u8], s: u8) -> Vec<u8> {
    p.iter().map(|c| field.mul(*c, s)).collect()
}

/// Add two polynomials, aligning them at the constant term.
pub fn add(p: &[u8], q: &[u8]) -> Vec<u8> {
    let len = p.len().max(q.len());
    let mut result = vec![0; len];
    for (r, c) in result[len - p.len()..].iter_mut().zip(p) {
        *r = *c;
    }
    for (r, c) in result[len - q.len()..].iter_mut().zip(q) {
        *r ^= *c;
    }
    result
}

/// Multiply two polynomials. The product with an empty polynomial is empty.
pub fn mul(field: &Field, p: &[u8], q: &[u8]) -> Vec<u8> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0; p.len() + q.len() - 1];
    for (j, qj) in q.iter().enumerate() {
        for (i, pi) in p.iter().enumerate() {
            result[i + j] ^= field.mul(*pi, *qj);
        }
    }
    result
}

/// Evaluate `p` at `x` with Horner's scheme.
///
/// For example, `x^4 + 0f x^3 + 36 x^2 + 78 x + 40` is computed as
/// `(((x + 0f) x + 36) x + 78) x + 40`.
pub fn eval(field: &Field, p: &[u8], x: u8) -> u8 {
    p.iter().fold(0, |y, c| field.mul(y, x) ^ *c)
}

/// Divide `dividend` by the monic polynomial `divisor`.
///
/// Returns `(quotient, remainder)`. The remainder always has
/// `divisor.len() - 1` coefficients.
pub fn div(field: &Field, dividend: &[u8], divisor: &[u8]) -> Result<(Vec<u8>, Vec<u8>), Error> {
    if divisor.first() != Some(&1) {
        return Err(Error::InvalidDivisor);
    }
    let separator = divisor.len() - 1;
    if dividend.len() < divisor.len() {
        let mut remainder = vec![0; separator - dividend.len()];
        remainder.extend_from_slice(dividend);
        return Ok((Vec::new(), remainder));
    }

    // Extended synthetic division. The leading coefficient of the divisor is 1,
    // so the current coefficient is directly the next quotient coefficient and
    // no normalization is needed.
    let mut result = dividend.to_vec();
    for i in 0..dividend.len() - separator {
        let coef = result[i];
        if coef == 0 {
            continue;
        }
        for (j, d) in divisor.iter().enumerate().skip(1) {
            if *d != 0 {
                result[i + j] ^= field.mul(*d, coef);
            }
        }
    }
    let remainder = result.split_off(dividend.len() - separator);
    Ok((result, remainder))
}

/// Remove leading zero coefficients. The zero polynomial becomes empty.
pub fn strip_leading_zeros(p: &mut Vec<u8>) {
    let zeros = p.iter().take_while(|c| **c == 0).count();
    p.drain(..zeros);
}

#[test]
fn test_add() {
    assert_eq!(add(&[1, 2, 3], &[7]), vec![1, 2, 4]);
    assert_eq!(add(&[5], &[1, 0, 5]), vec![1, 0, 0]);
    assert_eq!(add(&[], &[3, 4]), vec![3, 4]);
}

#[test]
fn test_scale() {
    let f = gf256();
    assert_eq!(scale(&f, &[1, 0, 137], 42), vec![42, 0, 195]);
    assert_eq!(scale(&f, &[9, 8], 0), vec![0, 0]);
}

#[test]
fn test_mul() {
    let f = gf256();
    // (x + 1)(x + 1) = x^2 + 1 in characteristic 2
    assert_eq!(mul(&f, &[1, 1], &[1, 1]), vec![1, 0, 1]);
    // (x + 2)(x + 4) = x^2 + 6x + 8
    assert_eq!(mul(&f, &[1, 2], &[1, 4]), vec![1, 6, 8]);
    assert_eq!(mul(&f, &[], &[1, 4]), Vec::<u8>::new());
}

#[test]
fn test_eval() {
    let f = gf256();
    let p = [1, 6, 8];
    assert_eq!(eval(&f, &p, 2), 0);
    assert_eq!(eval(&f, &p, 4), 0);
    assert_eq!(eval(&f, &p, 0), 8);
    assert_eq!(eval(&f, &p, 1), 1 ^ 6 ^ 8);
    assert_eq!(eval(&f, &[], 5), 0);
}

#[test]
fn test_div() {
    let f = gf256();
    let p = mul(&f, &[1, 2], &[1, 4]);
    let (q, r) = div(&f, &add(&p, &[3]), &[1, 4]).unwrap();
    assert_eq!(q, vec![1, 2]);
    assert_eq!(r, vec![3]);

    let divisor = [1, 7, 9];
    let dividend = [12, 0, 77, 5, 1];
    let (q, r) = div(&f, &dividend, &divisor).unwrap();
    assert_eq!(r.len(), 2);
    assert_eq!(add(&mul(&f, &q, &divisor), &r), dividend.to_vec());
}

#[test]
fn test_div_short_dividend() {
    let f = gf256();
    let (q, r) = div(&f, &[5], &[1, 2, 3]).unwrap();
    assert!(q.is_empty());
    assert_eq!(r, vec![0, 5]);
}

#[test]
fn test_div_invalid_divisor() {
    let f = gf256();
    assert_eq!(div(&f, &[1, 2, 3], &[]), Err(Error::InvalidDivisor));
    assert_eq!(div(&f, &[1, 2, 3], &[2, 1]), Err(Error::InvalidDivisor));
}

#[test]
fn test_strip() {
    let mut p = vec![0, 0, 3, 0];
    strip_leading_zeros(&mut p);
    assert_eq!(p, vec![3, 0]);
    let mut z = vec![0, 0];
    strip_leading_zeros(&mut z);
    assert!(z.is_empty());
}
