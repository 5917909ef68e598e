//! Reed-Solomon error correction codes over GF(2^m).
//!
//! By appending some redundancy to a message one can recover from, say,
//! transmission or storage errors. A clever way to add redundancy is the
//! Reed-Solomon code. The details involve some "higher" algebra (finite
//! fields, also called Galois fields). Any book about coding theory covers
//! it, for example "Error Correction Coding: Mathematical Methods and
//! Algorithms" by Moon.
//!
//! A message of `k` symbols is extended by `nsym` parity symbols. The decoder
//! can then repair up to `nsym / 2` symbols at unknown positions (_errors_),
//! or up to `nsym` symbols at known positions (_erasures_), or any mix with
//! `2 * errors + erasures <= nsym`.
//!
//! ```rust
//! use rscodec::{CodecConfig, ReedSolomon};
//!
//! let rs = ReedSolomon::new(CodecConfig::new(10)).unwrap();
//! let mut codeword = rs.encode(b"Hello, World!").unwrap();
//! codeword[3] ^= 0xff;
//! codeword[8] = 0;
//! let decoded = rs.decode(&codeword).unwrap();
//! assert_eq!(decoded.message, b"Hello, World!");
//! ```
//!
//! The building blocks are public as well: [galois] for the field arithmetic,
//! [poly] for polynomials over the field, [decoding] for the individual
//! decoding steps and [primitive] to search for field polynomials.
#![no_std]

extern crate alloc;

mod codec;
mod config;
pub mod decoding;
pub mod encoding;
mod error;
pub mod galois;
pub mod poly;
pub mod primitive;

pub use codec::{Decoded, ReedSolomon};
pub use config::{CodecConfig, DEFAULT_PRIMITIVE};
pub use error::{Error, Uncorrectable};
pub use galois::Field;
