use alloc::vec::Vec;

use crate::config::CodecConfig;
use crate::decoding;
use crate::encoding;
use crate::error::Error;
use crate::galois::Field;

#[cfg(test)]
use crate::error::Uncorrectable;
#[cfg(test)]
use alloc::vec;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered message symbols.
    pub message: Vec<u8>,
    /// The recovered parity symbols.
    pub parity: Vec<u8>,
    /// Positions (ascending) where the received codeword was changed.
    pub corrected: Vec<usize>,
}

/// A Reed-Solomon encoder and decoder.
///
/// The field tables and the generator polynomial are computed once in
/// [ReedSolomon::new]. Afterwards the codec is immutable and can be shared
/// between threads.
///
/// ## Examples
///
/// ```rust
/// # use rscodec::{CodecConfig, ReedSolomon};
/// let rs = ReedSolomon::new(CodecConfig::new(6)).unwrap();
/// let mut codeword = rs.encode(b"hello world").unwrap();
/// assert_eq!(codeword.len(), 11 + 6);
///
/// codeword[0] = 20;
/// codeword[1] = 0;
/// codeword[2] = 3;
/// let decoded = rs.decode(&codeword).unwrap();
/// assert_eq!(decoded.message, b"hello world");
/// assert_eq!(decoded.corrected, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    field: Field,
    ecc_symbols: usize,
    generator: Vec<u8>,
}

impl ReedSolomon {
    pub fn new(config: CodecConfig) -> Result<Self, Error> {
        let field = Field::new(config.primitive, config.field_size)?;
        if config.ecc_symbols == 0 || config.ecc_symbols >= field.size() {
            return Err(Error::InvalidEccSymbols {
                ecc_symbols: config.ecc_symbols,
                field_size: field.size(),
            });
        }
        let generator = encoding::generator_poly(&field, config.ecc_symbols);
        tracing::debug!(?field, ecc_symbols = config.ecc_symbols, "codec ready");
        Ok(Self {
            field,
            ecc_symbols: config.ecc_symbols,
            generator,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn ecc_symbols(&self) -> usize {
        self.ecc_symbols
    }

    /// The generator polynomial, highest power first.
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    pub fn max_message_len(&self) -> usize {
        self.field.size() - self.ecc_symbols
    }

    /// Encode `message` into a codeword: the message followed by the parity symbols.
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>, Error> {
        let _span = tracing::debug_span!("encode", len = message.len()).entered();
        if message.len() > self.max_message_len() {
            return Err(Error::MessageTooLong {
                len: message.len(),
                max: self.max_message_len(),
            });
        }
        self.check_symbols(message)?;
        tracing::trace!(?message, "message symbols");

        let parity = encoding::parity(&self.field, message, &self.generator)?;
        let mut codeword = Vec::with_capacity(message.len() + parity.len());
        codeword.extend_from_slice(message);
        codeword.extend_from_slice(&parity);
        Ok(codeword)
    }

    /// Decode a codeword, correcting up to `ecc_symbols / 2` errors.
    pub fn decode(&self, codeword: &[u8]) -> Result<Decoded, Error> {
        self.decode_with_erasures(codeword, &[])
    }

    /// Decode a codeword with known erasure positions.
    ///
    /// Erasures are counted from the start of the codeword, duplicates are
    /// ignored. Any combination of `e` errors and `f` erasures with
    /// `2e + f <= ecc_symbols` is corrected.
    pub fn decode_with_erasures(
        &self,
        codeword: &[u8],
        erasures: &[usize],
    ) -> Result<Decoded, Error> {
        let _span = tracing::debug_span!("decode", len = codeword.len(), erasures = erasures.len())
            .entered();
        self.check_codeword(codeword)?;

        let corrected = decoding::correct(&self.field, codeword, self.ecc_symbols, erasures)?;
        let changed = codeword
            .iter()
            .zip(&corrected)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();

        let mut message = corrected;
        let parity = message.split_off(codeword.len() - self.ecc_symbols);
        Ok(Decoded {
            message,
            parity,
            corrected: changed,
        })
    }

    /// Check if `codeword` is a valid codeword, without correcting anything.
    pub fn check(&self, codeword: &[u8]) -> Result<bool, Error> {
        self.check_codeword(codeword)?;
        let synd = decoding::syndromes(&self.field, codeword, self.ecc_symbols);
        Ok(decoding::all_zero(&synd))
    }

    fn check_codeword(&self, codeword: &[u8]) -> Result<(), Error> {
        if codeword.len() > self.field.size() {
            return Err(Error::CodewordTooLong {
                len: codeword.len(),
                max: self.field.size(),
            });
        }
        if codeword.len() < self.ecc_symbols {
            return Err(Error::CodewordTooShort {
                len: codeword.len(),
                ecc_symbols: self.ecc_symbols,
            });
        }
        self.check_symbols(codeword)
    }

    fn check_symbols(&self, symbols: &[u8]) -> Result<(), Error> {
        match symbols.iter().position(|s| !self.field.contains(*s)) {
            Some(index) => Err(Error::SymbolOutOfRange {
                index,
                value: symbols[index],
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
fn codec(ecc_symbols: usize) -> ReedSolomon {
    ReedSolomon::new(CodecConfig::new(ecc_symbols)).unwrap()
}

#[test]
fn test_encode_hello_world() {
    let rs = codec(6);
    let encoded = rs.encode(b"hello world").unwrap();
    assert_eq!(encoded.len(), 17);
    assert_eq!(&encoded[..11], b"hello world");
    assert_eq!(rs.generator().len(), 7);
    assert!(rs.check(&encoded).unwrap());
}

#[test]
fn test_decode_hello_world() {
    let rs = codec(6);
    let encoded = rs.encode(b"hello world").unwrap();
    let mut corrupted = encoded.clone();
    corrupted[0] = 20;
    corrupted[1] = 0;
    corrupted[2] = 3;
    assert!(!rs.check(&corrupted).unwrap());
    let decoded = rs.decode(&corrupted).unwrap();
    assert_eq!(decoded.message, b"hello world".to_vec());
    assert_eq!(decoded.parity, encoded[11..].to_vec());
    assert_eq!(decoded.corrected, vec![0, 1, 2]);
}

#[test]
fn test_decode_clean_codeword() {
    let rs = codec(4);
    let encoded = rs.encode(b"nothing to do").unwrap();
    let decoded = rs.decode(&encoded).unwrap();
    assert_eq!(decoded.message, b"nothing to do".to_vec());
    assert!(decoded.corrected.is_empty());
}

#[test]
fn test_empty_message() {
    let rs = codec(4);
    let encoded = rs.encode(&[]).unwrap();
    assert_eq!(encoded, vec![0; 4]);
    let decoded = rs.decode(&encoded).unwrap();
    assert!(decoded.message.is_empty());
}

#[test]
fn test_length_limits() {
    let rs = codec(10);
    assert_eq!(rs.max_message_len(), 245);
    assert!(rs.encode(&[7; 245]).is_ok());
    assert_eq!(
        rs.encode(&[7; 246]),
        Err(Error::MessageTooLong { len: 246, max: 245 })
    );
    assert_eq!(
        rs.decode(&[0; 256]),
        Err(Error::CodewordTooLong { len: 256, max: 255 })
    );
    assert_eq!(
        rs.decode(&[0; 9]),
        Err(Error::CodewordTooShort {
            len: 9,
            ecc_symbols: 10
        })
    );
}

#[test]
fn test_invalid_config() {
    assert_eq!(
        ReedSolomon::new(CodecConfig::new(0)).unwrap_err(),
        Error::InvalidEccSymbols {
            ecc_symbols: 0,
            field_size: 255
        }
    );
    assert_eq!(
        ReedSolomon::new(CodecConfig::new(255)).unwrap_err(),
        Error::InvalidEccSymbols {
            ecc_symbols: 255,
            field_size: 255
        }
    );
    assert_eq!(
        ReedSolomon::new(CodecConfig::new(4).with_primitive(0x11b)).unwrap_err(),
        Error::NotPrimitive {
            primitive: 0x11b,
            period: 51
        }
    );
}

#[test]
fn test_erasure_validation() {
    let rs = codec(4);
    let encoded = rs.encode(b"abc").unwrap();
    assert_eq!(
        rs.decode_with_erasures(&encoded, &[7]),
        Err(Error::ErasureOutOfRange {
            position: 7,
            len: 7
        })
    );
    assert_eq!(
        rs.decode_with_erasures(&encoded, &[0, 1, 2, 3, 4]),
        Err(Error::Uncorrectable(Uncorrectable::TooManyErasures {
            erasures: 5,
            ecc_symbols: 4
        }))
    );
    // duplicates count once
    let mut damaged = encoded.clone();
    damaged[1] = 0x99;
    let decoded = rs.decode_with_erasures(&damaged, &[1, 1, 1, 1, 1]).unwrap();
    assert_eq!(decoded.message, b"abc".to_vec());
    assert_eq!(decoded.corrected, vec![1]);
}

#[test]
fn test_small_field() {
    let config = CodecConfig::new(4).with_primitive(0x13).with_field_size(15);
    let rs = ReedSolomon::new(config).unwrap();
    let message = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
    let encoded = rs.encode(&message).unwrap();
    assert_eq!(encoded.len(), 15);
    assert!(encoded.iter().all(|s| *s <= 15));
    assert_eq!(
        rs.encode(&[16]),
        Err(Error::SymbolOutOfRange {
            index: 0,
            value: 16
        })
    );

    let mut corrupted = encoded.clone();
    corrupted[4] ^= 0x9;
    corrupted[13] ^= 0x1;
    let decoded = rs.decode(&corrupted).unwrap();
    assert_eq!(decoded.message, message.to_vec());
    assert_eq!(decoded.corrected, vec![4, 13]);
}

#[test]
fn test_codec_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReedSolomon>();
    assert_send_sync::<Field>();
}
