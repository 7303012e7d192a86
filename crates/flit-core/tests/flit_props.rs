// crates/flit-core/tests/flit_props.rs

use flit_core::flit::{
    decode_all, decode_fast, decode_safe, encode, encode_all, encoded_len, FlitReader,
    FlitWriter, LONG_FORM_THRESHOLD, MAX_ENCODED_LEN,
};
use flit_core::FlitError;
use proptest::prelude::*;

/// Values with a uniformly random bit length, so every length class shows up.
fn any_width_u64() -> impl Strategy<Value = u64> {
    (1u32..=64, any::<u64>()).prop_map(|(bits, r)| {
        if bits == 64 {
            r
        } else {
            r & ((1u64 << bits) - 1)
        }
    })
}

fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn rand_width_u64(seed: &mut u64) -> u64 {
    let bits = (splitmix64(seed) % 64) as u32 + 1;
    let r = splitmix64(seed);
    if bits == 64 {
        r
    } else {
        r & ((1u64 << bits) - 1)
    }
}

proptest! {
    #[test]
    fn roundtrip_both_decoders(v in any_width_u64()) {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let n = encode(v, &mut buf);
        prop_assert_eq!(n, encoded_len(v));
        prop_assert_eq!(decode_fast(&buf), (v, n));
        prop_assert_eq!(decode_safe(&buf[..n]).unwrap(), (v, n));
    }

    #[test]
    fn length_is_minimal(v in any_width_u64()) {
        let n = encoded_len(v);
        if v >= LONG_FORM_THRESHOLD {
            prop_assert_eq!(n, 9);
        } else {
            // n bytes carry 7*n payload bits in the short form.
            prop_assert!(v < 1u64 << (7 * n));
            if n > 1 {
                prop_assert!(v >= 1u64 << (7 * (n - 1)));
            }
        }
    }

    #[test]
    fn truncated_chunks_fail(v in any_width_u64()) {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let n = encode(v, &mut buf);
        for cut in 0..n {
            let is_truncated = matches!(decode_safe(&buf[..cut]), Err(FlitError::Truncated { .. }));
            prop_assert!(is_truncated, "cut={} n={}", cut, n);
        }
    }

    #[test]
    fn sentinel_below_threshold_is_rejected(v in 0u64..LONG_FORM_THRESHOLD) {
        let mut buf = [0u8; 9];
        buf[1..].copy_from_slice(&v.to_le_bytes());
        let is_non_canonical = matches!(decode_safe(&buf), Err(FlitError::NonCanonical { .. }));
        prop_assert!(is_non_canonical);
    }

    #[test]
    fn stream_roundtrip(values in prop::collection::vec(any_width_u64(), 0..64)) {
        let bytes = encode_all(&values);
        prop_assert_eq!(decode_all(&bytes).unwrap(), values);
    }
}

#[test]
fn fuzz_1024_values_fast_and_safe() {
    let mut seed = 0x1234_5678_9abc_def0u64;

    for _round in 0..16 {
        let values: Vec<u64> = (0..1024).map(|_| rand_width_u64(&mut seed)).collect();

        let mut w = FlitWriter::new();
        let mut expected_len = 0usize;
        for &v in &values {
            expected_len += w.push(v);
        }
        let encoded = w.into_inner();
        assert_eq!(encoded.len(), expected_len);

        // Fast path: pad so the last chunk still has 9 readable bytes.
        let mut padded = encoded.clone();
        padded.extend_from_slice(&[0u8; MAX_ENCODED_LEN]);
        let mut pos = 0usize;
        for &v in &values {
            let (got, n) = decode_fast(&padded[pos..]);
            assert_eq!(got, v);
            pos += n;
        }
        assert_eq!(pos, encoded.len());

        // Safe path on the exact buffer.
        let mut pos = 0usize;
        for &v in &values {
            let (got, n) = decode_safe(&encoded[pos..]).unwrap();
            assert_eq!(got, v);
            pos += n;
        }
        assert_eq!(pos, encoded.len());

        // Reader mixes both and ends exactly at the buffer end.
        let mut r = FlitReader::new(&encoded);
        for &v in &values {
            assert_eq!(r.next_value().unwrap().unwrap(), v);
        }
        assert!(r.next_value().is_none());
        assert_eq!(r.position(), encoded.len());
    }
}

#[test]
fn reader_stops_on_truncated_tail() {
    let mut bytes = encode_all(&[1, 2, 1 << 40]);
    bytes.pop();

    let mut r = FlitReader::new(&bytes);
    assert_eq!(r.next_value().unwrap().unwrap(), 1);
    assert_eq!(r.next_value().unwrap().unwrap(), 2);
    let pos = r.position();
    assert!(matches!(r.next_value(), Some(Err(FlitError::Truncated { .. }))));
    assert_eq!(r.position(), pos);
    assert!(decode_all(&bytes).is_err());
}

#[test]
fn reader_rejects_non_canonical_even_with_padding() {
    let mut bytes = vec![0u8; 9];
    bytes[1..].copy_from_slice(&42u64.to_le_bytes());
    bytes.extend_from_slice(&[0x01; 16]);
    assert!(matches!(
        FlitReader::new(&bytes).next_value(),
        Some(Err(FlitError::NonCanonical { value: 42 }))
    ));
}
