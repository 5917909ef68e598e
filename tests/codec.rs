use pretty_assertions::assert_eq;
use rscodec::{decoding, CodecConfig, Error, Field, ReedSolomon, Uncorrectable};

fn hello_world_codec() -> ReedSolomon {
    ReedSolomon::new(CodecConfig {
        primitive: 0x11d,
        field_size: 255,
        ecc_symbols: 6,
    })
    .unwrap()
}

#[test]
fn hello_world_scenario() {
    let rs = hello_world_codec();
    let encoded = rs.encode(b"hello world").unwrap();
    assert_eq!(encoded.len(), 17);

    let mut corrupted = encoded.clone();
    corrupted[0] = 20;
    corrupted[1] = 0;
    corrupted[2] = 3;
    let decoded = rs.decode(&corrupted).unwrap();
    assert_eq!(decoded.message, b"hello world".to_vec());
    assert_eq!(decoded.parity, encoded[11..].to_vec());
}

#[test]
fn generator_is_deterministic() {
    let a = hello_world_codec();
    let b = hello_world_codec();
    assert_eq!(a.generator(), b.generator());
    assert_eq!(a.generator().len(), 7);
    assert_eq!(a.generator()[0], 1);
}

#[test]
fn field_is_a_full_cycle() {
    let field = Field::new(0x11d, 255).unwrap();
    let mut seen = [false; 256];
    for x in field.alpha_powers().take(255) {
        assert!(x != 0 && !seen[x as usize], "duplicate or zero element {}", x);
        seen[x as usize] = true;
    }
    for x in 1..=255u8 {
        assert_eq!(field.mul(x, field.inverse(x).unwrap()), 1);
        assert_eq!(field.div(x, 0), Err(Error::DivisionByZero));
    }
}

#[test]
fn clean_codeword_takes_the_fast_path() {
    let rs = hello_world_codec();
    let encoded = rs.encode(b"fast path").unwrap();
    let synd = decoding::syndromes(rs.field(), &encoded, rs.ecc_symbols());
    assert!(decoding::all_zero(&synd));
    assert!(rs.decode(&encoded).unwrap().corrected.is_empty());
}

#[test]
fn four_errors_with_six_parity_symbols() {
    let rs = hello_world_codec();
    let encoded = rs.encode(b"hello world").unwrap();
    let mut corrupted = encoded.clone();
    for pos in [0, 4, 8, 12] {
        corrupted[pos] ^= 0x5c;
    }
    match rs.decode(&corrupted) {
        Ok(decoded) => assert!(decoded.message != b"hello world".to_vec()),
        Err(Error::Uncorrectable(reason)) => {
            assert!(matches!(
                reason,
                Uncorrectable::TooManyErrors { .. }
                    | Uncorrectable::RootCountMismatch { .. }
                    | Uncorrectable::DegenerateErrorValue { .. }
                    | Uncorrectable::ResidualSyndrome
            ));
        }
        Err(other) => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn erasures_double_the_capacity() {
    let rs = hello_world_codec();
    let encoded = rs.encode(b"hello world").unwrap();
    let mut corrupted = encoded.clone();
    let erasures = [0, 3, 5, 10, 12, 16];
    for pos in erasures {
        corrupted[pos] = 0xee;
    }
    let decoded = rs.decode_with_erasures(&corrupted, &erasures).unwrap();
    assert_eq!(decoded.message, b"hello world".to_vec());
    assert_eq!(decoded.parity, encoded[11..].to_vec());
}

#[test]
fn shared_between_threads() {
    let rs = ReedSolomon::new(CodecConfig::new(16)).unwrap();
    std::thread::scope(|s| {
        for t in 0..4u8 {
            let rs = &rs;
            s.spawn(move || {
                for i in 0..50u8 {
                    let message: Vec<u8> = (0..100).map(|k| k ^ i ^ t).collect();
                    let mut codeword = rs.encode(&message).unwrap();
                    let len = codeword.len();
                    for j in 0..8 {
                        codeword[(j * 13 + i as usize) % len] ^= 0x80 | t;
                    }
                    assert_eq!(rs.decode(&codeword).unwrap().message, message);
                }
            });
        }
    });
}

#[test]
fn automatic_polynomial() {
    let config = CodecConfig::with_symbol_bits(6, 8).unwrap();
    assert_eq!(config.field_size, 63);
    let rs = ReedSolomon::new(config).unwrap();
    let message: Vec<u8> = (0..40).collect();
    let mut codeword = rs.encode(&message).unwrap();
    codeword[1] ^= 0x3f;
    codeword[30] ^= 0x01;
    codeword[47] ^= 0x20;
    assert_eq!(rs.decode(&codeword).unwrap().message, message);
}
