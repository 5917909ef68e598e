use thiserror::Error;

/// Errors returned by the codec and the underlying field arithmetic.
///
/// Everything except [Error::Uncorrectable] points at a bad configuration
/// or a caller bug. An uncorrectable outcome means the received data was
/// damaged beyond what the parity symbols can repair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The field size is not of the form `2^m - 1` with `2 <= m <= 8`.
    #[error("field size {0} is not 2^m - 1 for a symbol size between 2 and 8 bits")]
    InvalidFieldSize(usize),

    /// The primitive polynomial does not have the degree of the field.
    #[error("polynomial {primitive:#x} does not have degree {degree}")]
    InvalidPrimitive { primitive: u16, degree: u32 },

    /// The powers of `x` cycle before reaching every non-zero element.
    #[error("polynomial {primitive:#x} is not primitive, powers of x repeat after {period} steps")]
    NotPrimitive { primitive: u16, period: usize },

    /// The number of parity symbols does not fit into the field.
    #[error("{ecc_symbols} parity symbols do not fit a field of size {field_size}")]
    InvalidEccSymbols {
        ecc_symbols: usize,
        field_size: usize,
    },

    #[error("message of {len} symbols exceeds the maximum of {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("codeword of {len} symbols exceeds the field size {max}")]
    CodewordTooLong { len: usize, max: usize },

    #[error("codeword of {len} symbols is shorter than the {ecc_symbols} parity symbols")]
    CodewordTooShort { len: usize, ecc_symbols: usize },

    #[error("symbol {value} at index {index} is not an element of the field")]
    SymbolOutOfRange { index: usize, value: u8 },

    #[error("erasure position {position} is outside the codeword of length {len}")]
    ErasureOutOfRange { position: usize, len: usize },

    /// Synthetic division needs a non-empty monic divisor.
    #[error("polynomial divisor must be non-empty with leading coefficient 1")]
    InvalidDivisor,

    #[error("division by zero in the Galois field")]
    DivisionByZero,

    #[error(transparent)]
    Uncorrectable(#[from] Uncorrectable),
}

impl Error {
    /// Returns `true` if the input was too damaged to be repaired.
    pub fn is_uncorrectable(&self) -> bool {
        matches!(self, Error::Uncorrectable(_))
    }
}

/// Reasons why a received codeword could not be repaired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Uncorrectable {
    #[error("{erasures} erasures exceed the {ecc_symbols} parity symbols")]
    TooManyErasures { erasures: usize, ecc_symbols: usize },

    /// Each error costs two parity symbols, each erasure one.
    #[error("{errors} errors and {erasures} erasures exceed the capacity of {ecc_symbols} parity symbols")]
    TooManyErrors {
        errors: usize,
        erasures: usize,
        ecc_symbols: usize,
    },

    /// The error locator does not split into distinct roots inside the codeword.
    #[error("error locator of degree {expected} has {found} roots in the codeword")]
    RootCountMismatch { expected: usize, found: usize },

    #[error("error value at position {position} is undefined")]
    DegenerateErrorValue { position: usize },

    /// The corrected codeword still has non-zero syndromes.
    #[error("correction failed, syndromes are non-zero after repair")]
    ResidualSyndrome,
}
