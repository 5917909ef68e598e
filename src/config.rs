use crate::error::Error;
use crate::galois::MAX_FIELD_SIZE;
use crate::primitive;

#[cfg(test)]
use pretty_assertions::assert_eq;

/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 used by QR codes and RAID-6.
pub const DEFAULT_PRIMITIVE: u16 = 0x11d;

/// Parameters of a Reed-Solomon code.
///
/// A codeword holds at most `field_size` symbols, of which `ecc_symbols` are
/// parity. Up to `ecc_symbols / 2` errors at unknown positions, or up to
/// `ecc_symbols` erasures at known positions, can be corrected.
///
/// ## Examples
///
/// ```rust
/// # use rscodec::CodecConfig;
/// // 8-bit symbols with the standard polynomial and 10 parity symbols
/// let config = CodecConfig::new(10);
///
/// // 4-bit symbols, codewords of at most 15 symbols
/// let small = CodecConfig::new(4).with_primitive(0x13).with_field_size(15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecConfig {
    /// Primitive polynomial defining the field, the bits are its coefficients.
    pub primitive: u16,
    /// Number of non-zero field elements, `2^m - 1` for `m`-bit symbols.
    pub field_size: usize,
    /// Number of parity symbols appended to each message.
    pub ecc_symbols: usize,
}

impl CodecConfig {
    /// Configuration for 8-bit symbols with the polynomial [DEFAULT_PRIMITIVE].
    pub fn new(ecc_symbols: usize) -> Self {
        Self {
            primitive: DEFAULT_PRIMITIVE,
            field_size: MAX_FIELD_SIZE,
            ecc_symbols,
        }
    }

    /// Configuration for `bits`-bit symbols, picking the smallest primitive
    /// polynomial of that degree.
    pub fn with_symbol_bits(bits: u32, ecc_symbols: usize) -> Result<Self, Error> {
        let field_size = (1usize << bits.min(16)) - 1;
        if !(2..=8).contains(&bits) {
            return Err(Error::InvalidFieldSize(field_size));
        }
        let primitive = primitive::first_primitive_polynomial(bits)
            .ok_or(Error::InvalidFieldSize(field_size))?;
        Ok(Self {
            primitive: primitive as u16,
            field_size,
            ecc_symbols,
        })
    }

    pub fn with_primitive(mut self, primitive: u16) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn with_field_size(mut self, field_size: usize) -> Self {
        self.field_size = field_size;
        self
    }

    /// Largest number of message symbols per codeword.
    pub fn max_message_len(&self) -> usize {
        self.field_size.saturating_sub(self.ecc_symbols)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

#[test]
fn test_defaults() {
    let config = CodecConfig::default();
    assert_eq!(config.primitive, 0x11d);
    assert_eq!(config.field_size, 255);
    assert_eq!(config.ecc_symbols, 10);
    assert_eq!(config.max_message_len(), 245);
}

#[test]
fn test_symbol_bits() {
    assert_eq!(
        CodecConfig::with_symbol_bits(8, 6),
        Ok(CodecConfig::new(6))
    );
    assert_eq!(
        CodecConfig::with_symbol_bits(4, 2),
        Ok(CodecConfig::new(2).with_primitive(0x13).with_field_size(15))
    );
    assert_eq!(
        CodecConfig::with_symbol_bits(9, 2),
        Err(Error::InvalidFieldSize(511))
    );
}
