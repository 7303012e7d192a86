// crates/flit-core/tests/frame_roundtrip.rs

use flit_core::frame::{decode_frame, encode_frame, frame_id_hex, frame_payload, MAGIC};
use flit_core::{FlitError, LengthHistogram};

fn sample() -> Vec<u64> {
    vec![0, 1, 127, 128, 300, 1 << 21, 1 << 35, (1 << 56) - 1, 1 << 56, u64::MAX]
}

fn expect_frame_err(bytes: &[u8], needle: &str) {
    match decode_frame(bytes) {
        Err(FlitError::Frame(msg)) => assert!(msg.contains(needle), "msg={msg:?} needle={needle:?}"),
        other => panic!("expected frame error containing {needle:?}, got {other:?}"),
    }
}

#[test]
fn frame_roundtrip_and_deterministic_id() {
    let values = sample();
    let a = encode_frame(&values);
    let b = encode_frame(&values);
    assert_eq!(a, b);
    assert_eq!(&a[0..4], MAGIC);

    let f = decode_frame(&a).expect("decode");
    assert_eq!(f.values, values);
    assert_eq!(f.count, values.len() as u64);
    assert_eq!(
        f.payload_len,
        LengthHistogram::from_values(&values).bytes
    );

    let hex = frame_id_hex(&a).expect("id");
    assert_eq!(hex.len(), 32);
    assert_eq!(hex, flit_core::checksum::hex16(&f.id));

    let other = encode_frame(&[1, 2, 3]);
    assert_ne!(frame_id_hex(&other).unwrap(), hex);
}

#[test]
fn empty_frame() {
    let bytes = encode_frame(&[]);
    let f = decode_frame(&bytes).unwrap();
    assert!(f.values.is_empty());
    assert_eq!(f.payload_len, 0);
}

#[test]
fn payload_is_plain_chunk_stream() {
    let values = sample();
    let bytes = encode_frame(&values);
    let payload = frame_payload(&bytes).unwrap();
    assert_eq!(flit_core::flit::decode_all(payload).unwrap(), values);
}

#[test]
fn rejects_corruption() {
    let bytes = encode_frame(&sample());

    expect_frame_err(&bytes[..10], "too small");

    let mut bad = bytes.clone();
    bad[0] = b'X';
    expect_frame_err(&bad, "magic");

    let mut bad = bytes.clone();
    bad[30] ^= 0x40;
    expect_frame_err(&bad, "blake3");
}

/// Rebuild crc32 and id after editing the body so only the targeted check fires.
fn reseal(mut body: Vec<u8>) -> Vec<u8> {
    let crc = flit_core::checksum::crc32(&body);
    body.extend_from_slice(&crc.to_le_bytes());
    let id = flit_core::checksum::blake3_16(&body);
    body.extend_from_slice(&id);
    body
}

fn body_of(bytes: &[u8]) -> Vec<u8> {
    bytes[..bytes.len() - 20].to_vec()
}

#[test]
fn rejects_bad_header_fields() {
    let bytes = encode_frame(&[5, 6, 7]);

    let mut body = body_of(&bytes);
    body[4] = 9;
    expect_frame_err(&reseal(body), "version");

    let mut body = body_of(&bytes);
    body[6] = 1;
    expect_frame_err(&reseal(body), "flags");

    let mut body = body_of(&bytes);
    body[16] = 200;
    expect_frame_err(&reseal(body), "payload_len");

    let mut body = body_of(&bytes);
    body[8] = 2;
    expect_frame_err(&reseal(body), "trailing");

    let mut body = body_of(&bytes);
    body[8] = 3;
    body[24] = 0x00; // first chunk becomes a truncated sentinel
    expect_frame_err(&reseal(body), "value 0");
}

#[test]
fn stale_crc_is_reported() {
    let bytes = encode_frame(&[5, 6, 7]);
    let mut body = body_of(&bytes);
    let crc = flit_core::checksum::crc32(&body) ^ 1;
    body.extend_from_slice(&crc.to_le_bytes());
    let id = flit_core::checksum::blake3_16(&body);
    body.extend_from_slice(&id);
    expect_frame_err(&body, "crc32");
}
