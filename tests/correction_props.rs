use std::collections::BTreeMap;

use proptest::prelude::*;
use rscodec::{CodecConfig, ReedSolomon};

fn codec(ecc_symbols: usize) -> ReedSolomon {
    ReedSolomon::new(CodecConfig::new(ecc_symbols)).expect("standard field")
}

/// Turn arbitrary (position, flip) pairs into at most `limit` distinct
/// positions inside a codeword of length `len`.
fn damage(raw: &[(usize, u8)], len: usize, limit: usize) -> BTreeMap<usize, u8> {
    let mut damage = BTreeMap::new();
    for (pos, flip) in raw {
        if damage.len() == limit {
            break;
        }
        damage.entry(pos % len).or_insert(*flip);
    }
    damage
}

proptest! {
    #[test]
    fn roundtrip_without_damage(
        ecc_symbols in 1usize..=40,
        message in proptest::collection::vec(any::<u8>(), 0..=200),
    ) {
        let rs = codec(ecc_symbols);
        let encoded = rs.encode(&message).expect("message fits");
        prop_assert_eq!(encoded.len(), message.len() + ecc_symbols);
        prop_assert_eq!(&encoded[..message.len()], &message[..]);

        let decoded = rs.decode(&encoded).expect("valid codeword");
        prop_assert_eq!(decoded.message, message);
        prop_assert_eq!(&decoded.parity[..], &encoded[encoded.len() - ecc_symbols..]);
        prop_assert!(decoded.corrected.is_empty(), "clean codeword needs no correction");
    }

    #[test]
    fn corrects_up_to_half_the_parity(
        ecc_symbols in 2usize..=32,
        message in proptest::collection::vec(any::<u8>(), 1..=200),
        raw in proptest::collection::vec((any::<usize>(), 1u8..=255), 0..=16),
    ) {
        let rs = codec(ecc_symbols);
        let encoded = rs.encode(&message).expect("message fits");
        let damage = damage(&raw, encoded.len(), ecc_symbols / 2);

        let mut received = encoded.clone();
        for (pos, flip) in &damage {
            received[*pos] ^= flip;
        }

        let decoded = rs.decode(&received).expect("within correction capacity");
        prop_assert_eq!(decoded.message, message);
        prop_assert_eq!(decoded.corrected, damage.keys().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn corrects_errors_and_erasures(
        ecc_symbols in 2usize..=32,
        message in proptest::collection::vec(any::<u8>(), 1..=200),
        raw in proptest::collection::vec((any::<usize>(), 1u8..=255), 0..=32),
        split in 0.0f64..=1.0,
    ) {
        let rs = codec(ecc_symbols);
        let encoded = rs.encode(&message).expect("message fits");

        // spend the parity budget on erasures first, errors take two each
        let n_erasures = ((ecc_symbols as f64) * split) as usize;
        let n_errors = (ecc_symbols - n_erasures) / 2;
        let damage = damage(&raw, encoded.len(), n_erasures + n_errors);

        let mut received = encoded.clone();
        let mut erasures = Vec::new();
        for (i, (pos, flip)) in damage.iter().enumerate() {
            received[*pos] ^= flip;
            if i < n_erasures {
                erasures.push(*pos);
            }
        }

        let decoded = rs.decode_with_erasures(&received, &erasures).expect("within capacity");
        prop_assert_eq!(decoded.message, message);
        prop_assert_eq!(&decoded.parity[..], &encoded[encoded.len() - ecc_symbols..]);
    }

    #[test]
    fn beyond_capacity_never_returns_the_wrong_codeword_silently(
        ecc_symbols in 2usize..=16,
        message in proptest::collection::vec(any::<u8>(), 20..=100),
        raw in proptest::collection::vec((any::<usize>(), 1u8..=255), 40),
    ) {
        let rs = codec(ecc_symbols);
        let encoded = rs.encode(&message).expect("message fits");
        let count = ecc_symbols / 2 + 1 + raw[0].0 % ecc_symbols;
        let damage = damage(&raw, encoded.len(), count);
        prop_assume!(damage.len() > ecc_symbols / 2);

        let mut received = encoded.clone();
        for (pos, flip) in &damage {
            received[*pos] ^= flip;
        }

        match rs.decode(&received) {
            Ok(decoded) => {
                // a miscorrection must still be a genuine codeword ...
                let mut codeword = decoded.message.clone();
                codeword.extend_from_slice(&decoded.parity);
                prop_assert!(rs.check(&codeword).expect("valid length"));
                // ... close to what was received, hence not the original
                prop_assert!(decoded.corrected.len() <= ecc_symbols / 2);
                prop_assert_ne!(codeword, encoded);
            }
            Err(err) => prop_assert!(err.is_uncorrectable(), "unexpected error {}", err),
        }
    }
}
