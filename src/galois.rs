//! Arithmetic in the finite fields GF(2^m) used by the Reed-Solomon codes.
//!
//! An element of GF(2^m) is stored in a `u8`. Its bits are the coefficients
//! of a polynomial of degree less than `m`, the least significant bit being the
//! coefficient for 1. For example, in GF(256):
//!
//! > 137 = 0b10001001 = x^7 + x^3 + 1.
//!
//! Addition is done coefficient by coefficient modulo 2, so it is a plain XOR,
//! and subtraction is the same operation.
//!
//! Multiplying two polynomials can produce powers of x of `m` and above, so
//! multiplication is defined modulo a fixed polynomial of degree `m`, the
//! _primitive polynomial_. The usual choice for 8-bit symbols is 0x11D
//! (QR codes, CDs, RAID-6).
//!
//! For a primitive polynomial the powers 1, x, x^2, ..., x^(n-1) with
//! `n = 2^m - 1` run through all non-zero elements before repeating.
//! So any non-zero element `a` is a power `x^i`, and multiplying
//! `a = x^i` with `b = x^j` amounts to looking up `x^(i + j)`. The two
//! lookup tables for this are built once per [Field] and never change.
use core::fmt;
use core::iter;

use arrayvec::ArrayVec;

use crate::error::Error;

#[cfg(test)]
use alloc::vec::Vec;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Largest supported field size, GF(256) without the zero element.
pub const MAX_FIELD_SIZE: usize = 255;

const EXP_TABLE_LEN: usize = 2 * MAX_FIELD_SIZE;
const LOG_TABLE_LEN: usize = MAX_FIELD_SIZE + 1;

/// Multiply `x` and `y` as polynomials over GF(2) and reduce by `primitive`
/// whenever the bit `top_bit` shows up.
///
/// This is the table-free "Russian peasant" multiplication. It is only used to
/// build the lookup tables and to test candidate polynomials.
pub(crate) fn carryless_mul(mut x: u32, mut y: u32, primitive: u32, top_bit: u32) -> u32 {
    let mut result = 0;
    while y > 0 {
        if y & 1 != 0 {
            result ^= x;
        }
        y >>= 1;
        x <<= 1;
        if x & top_bit != 0 {
            x ^= primitive;
        }
    }
    result
}

/// Number of bits per symbol for a field of `field_size` non-zero elements.
pub(crate) fn symbol_bits(field_size: usize) -> Option<u32> {
    let order = field_size.checked_add(1)?;
    if !order.is_power_of_two() {
        return None;
    }
    let bits = order.trailing_zeros();
    (2..=8).contains(&bits).then_some(bits)
}

/// The field GF(2^m) given by a primitive polynomial, with its lookup tables.
///
/// The exponent table has `2n` entries so that the sum of two logarithms can
/// be looked up without reducing it modulo `n`.
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
    primitive: u16,
    size: usize,
    exponents: ArrayVec<u8, EXP_TABLE_LEN>,
    logs: ArrayVec<u8, LOG_TABLE_LEN>,
}

impl Field {
    /// Build the field for `primitive` with `field_size` non-zero elements.
    ///
    /// Fails if `field_size` is not `2^m - 1` for `2 <= m <= 8`, if
    /// `primitive` does not have degree `m`, or if `x` does not generate
    /// all non-zero elements.
    pub fn new(primitive: u16, field_size: usize) -> Result<Self, Error> {
        let degree = symbol_bits(field_size).ok_or(Error::InvalidFieldSize(field_size))?;
        if u32::from(primitive) >> degree != 1 {
            return Err(Error::InvalidPrimitive { primitive, degree });
        }

        let mut exponents = ArrayVec::new();
        let mut logs: ArrayVec<u8, LOG_TABLE_LEN> = iter::repeat(0).take(field_size + 1).collect();
        let mut seen = [false; LOG_TABLE_LEN];
        let top_bit = 1 << degree;

        let mut x: u32 = 1;
        for i in 0..field_size {
            let idx = x as usize;
            if x == 0 || seen[idx] {
                return Err(Error::NotPrimitive {
                    primitive,
                    period: i,
                });
            }
            seen[idx] = true;
            exponents.push(x as u8);
            logs[idx] = i as u8;
            x = carryless_mul(x, 2, u32::from(primitive), top_bit);
        }
        if x != 1 {
            return Err(Error::NotPrimitive {
                primitive,
                period: field_size,
            });
        }
        for i in field_size..2 * field_size {
            let wrapped = exponents[i - field_size];
            exponents.push(wrapped);
        }

        Ok(Self {
            primitive,
            size: field_size,
            exponents,
            logs,
        })
    }

    pub fn primitive(&self) -> u16 {
        self.primitive
    }

    /// Number of non-zero elements, `2^m - 1`.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn symbol_bits(&self) -> u32 {
        (self.size + 1).trailing_zeros()
    }

    /// Check if `symbol` is an element of the field.
    pub fn contains(&self, symbol: u8) -> bool {
        usize::from(symbol) <= self.size
    }

    #[inline]
    pub fn add(x: u8, y: u8) -> u8 {
        x ^ y
    }

    #[inline]
    pub fn sub(x: u8, y: u8) -> u8 {
        x ^ y
    }

    /// Multiply two field elements.
    ///
    /// # Panics
    ///
    /// The arguments must be elements of the field, see [Field::contains].
    /// Larger symbols in fields smaller than GF(256) panic.
    #[inline]
    pub fn mul(&self, x: u8, y: u8) -> u8 {
        debug_assert!(self.contains(x) && self.contains(y), "{} * {} outside of {:?}", x, y, self);
        if x == 0 || y == 0 {
            return 0;
        }
        let i = usize::from(self.logs[usize::from(x)]) + usize::from(self.logs[usize::from(y)]);
        self.exponents[i]
    }

    /// Divide `x` by `y`.
    ///
    /// # Panics
    ///
    /// Like [Field::mul] for symbols outside of the field.
    pub fn div(&self, x: u8, y: u8) -> Result<u8, Error> {
        debug_assert!(self.contains(x) && self.contains(y), "{} / {} outside of {:?}", x, y, self);
        if y == 0 {
            return Err(Error::DivisionByZero);
        }
        if x == 0 {
            return Ok(0);
        }
        let i = usize::from(self.logs[usize::from(x)]) + self.size
            - usize::from(self.logs[usize::from(y)]);
        Ok(self.exponents[i % self.size])
    }

    /// Compute `x^e`. Negative exponents are powers of the inverse.
    ///
    /// # Panics
    ///
    /// Like [Field::mul] for symbols outside of the field.
    pub fn pow(&self, x: u8, e: i32) -> Result<u8, Error> {
        debug_assert!(self.contains(x), "{} outside of {:?}", x, self);
        if x == 0 {
            return match e {
                0 => Ok(1),
                e if e > 0 => Ok(0),
                _ => Err(Error::DivisionByZero),
            };
        }
        let i = (i64::from(self.logs[usize::from(x)]) * i64::from(e)).rem_euclid(self.size as i64);
        Ok(self.exponents[i as usize])
    }

    /// Compute `alpha^e` for the generator root `alpha = x`.
    #[inline]
    pub fn alpha_pow(&self, e: i32) -> u8 {
        self.exponents[e.rem_euclid(self.size as i32) as usize]
    }

    /// The multiplicative inverse of `x`.
    ///
    /// # Panics
    ///
    /// Like [Field::mul] for symbols outside of the field.
    pub fn inverse(&self, x: u8) -> Result<u8, Error> {
        debug_assert!(self.contains(x), "{} outside of {:?}", x, self);
        if x == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.exponents[self.size - usize::from(self.logs[usize::from(x)])])
    }

    /// The discrete logarithm of `x` to the base `alpha`, `None` for zero.
    pub fn log(&self, x: u8) -> Option<usize> {
        if x == 0 || !self.contains(x) {
            return None;
        }
        Some(usize::from(self.logs[usize::from(x)]))
    }

    /// Iterator over 1, alpha, alpha^2, ..., repeating after `n` elements.
    pub fn alpha_powers(&self) -> impl Iterator<Item = u8> + '_ {
        self.exponents[..self.size].iter().cloned().cycle()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Field")
            .field("primitive", &format_args!("{:#x}", self.primitive))
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn gf256() -> Field {
    Field::new(0x11d, 255).unwrap()
}

#[test]
fn sanity_check_tables() {
    use alloc::collections::BTreeSet;

    let f = gf256();
    let cycle: BTreeSet<u8> = f.exponents[..255].iter().cloned().collect();
    assert_eq!(cycle.len(), 255);
    assert!(!cycle.contains(&0));

    for i in 0..255 {
        assert_eq!(i, f.logs[f.exponents[i] as usize] as usize);
        assert_eq!(i + 1, f.exponents[f.logs[i + 1] as usize] as usize);
    }
    for i in 255..510 {
        assert_eq!(f.exponents[i], f.exponents[i - 255]);
    }
}

#[test]
fn small_field_tables() {
    let f = Field::new(0x13, 15).unwrap();
    assert_eq!(f.symbol_bits(), 4);
    assert_eq!(
        &f.exponents[..15],
        &[1, 2, 4, 8, 3, 6, 12, 11, 5, 10, 7, 14, 15, 13, 9]
    );
    assert!(!f.contains(16));
}

#[test]
fn small_field_arithmetic() {
    let f = Field::new(0x13, 15).unwrap();
    for a in 1..=15 {
        assert_eq!(f.mul(a, f.inverse(a).unwrap()), 1);
        assert_eq!(f.pow(a, 15), Ok(1));
    }
}

#[test]
#[should_panic]
fn small_field_mul_rejects_foreign_symbol() {
    let f = Field::new(0x13, 15).unwrap();
    f.mul(200, 3);
}

#[test]
#[should_panic]
fn small_field_pow_rejects_foreign_symbol() {
    let f = Field::new(0x13, 15).unwrap();
    let _ = f.pow(200, 2);
}

#[test]
fn gf256_mul() {
    let f = gf256();
    assert_eq!(f.mul(137, 42), 195);
    assert_eq!(carryless_mul(137, 42, 0x11d, 256), 195);
    assert_eq!(f.mul(3, 7), 9);
    assert_eq!(f.mul(123, 1), 123);
    assert_eq!(f.mul(234, 0), 0);
    assert_eq!(f.mul(0, 23), 0);
}

#[test]
fn gf256_div_mul() {
    let f = gf256();
    for a in 0..=255 {
        for b in 1..=255 {
            let a_div_b = f.div(a, b).unwrap();
            assert_eq!(f.mul(a_div_b, b), a);
        }
    }
}

#[test]
fn gf256_inverse() {
    let f = gf256();
    for a in 1..=255 {
        assert_eq!(f.mul(a, f.inverse(a).unwrap()), 1);
        assert_eq!(f.pow(a, -1).unwrap(), f.inverse(a).unwrap());
    }
}

#[test]
fn division_by_zero() {
    let f = gf256();
    for a in 0..=255 {
        assert_eq!(f.div(a, 0), Err(Error::DivisionByZero));
    }
    assert_eq!(f.inverse(0), Err(Error::DivisionByZero));
    assert_eq!(f.pow(0, -3), Err(Error::DivisionByZero));
}

#[test]
fn gf256_pow() {
    let f = gf256();
    assert_eq!(f.pow(2, 8), Ok(29));
    assert_eq!(f.pow(0, 0), Ok(1));
    assert_eq!(f.pow(0, 5), Ok(0));
    for a in 1..=255 {
        assert_eq!(f.pow(a, 255), Ok(1));
        assert_eq!(f.pow(a, 2), Ok(f.mul(a, a)));
    }
    assert_eq!(f.alpha_pow(-1), f.inverse(2).unwrap());
    assert_eq!(f.alpha_pow(-300), f.alpha_pow(210));
}

#[test]
fn alpha_power_iterator() {
    let f = gf256();
    let powers: Vec<u8> = f.alpha_powers().take(500).collect();
    let mut power_direct = Vec::with_capacity(500);
    let mut a = 1;
    for i in 0..500 {
        power_direct.push(a);
        assert_eq!(f.alpha_pow(i), a);
        a = f.mul(a, 2);
    }
    assert_eq!(powers, power_direct);
}

#[test]
fn add_is_sub() {
    for a in 0..=255 {
        assert_eq!(Field::add(a, a), 0);
        assert_eq!(Field::sub(a, 17), Field::add(a, 17));
    }
}

#[test]
fn log_lookup() {
    let f = gf256();
    assert_eq!(f.log(0), None);
    assert_eq!(f.log(1), Some(0));
    assert_eq!(f.log(29), Some(8));
}

#[test]
fn rejects_bad_configuration() {
    // x has order 51 modulo the AES polynomial
    assert_eq!(
        Field::new(0x11b, 255),
        Err(Error::NotPrimitive {
            primitive: 0x11b,
            period: 51
        })
    );
    assert_eq!(Field::new(0x11d, 256), Err(Error::InvalidFieldSize(256)));
    assert_eq!(Field::new(0x3, 1), Err(Error::InvalidFieldSize(1)));
    assert_eq!(
        Field::new(0x13, 255),
        Err(Error::InvalidPrimitive {
            primitive: 0x13,
            degree: 8
        })
    );
}
