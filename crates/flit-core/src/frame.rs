// crates/flit-core/src/frame.rs

use crate::checksum::{blake3_16, crc32};
use crate::error::{FlitError, Result};
use crate::flit::{decode_safe, FlitWriter};

pub const MAGIC: &[u8; 4] = b"FLT1";
pub const VERSION: u16 = 1;

const HEADER_LEN: usize = 4 + 2 + 2 + 8 + 8;
const TRAILER_LEN: usize = 4 + 16;

/// Decoded `.flt` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub count: u64,
    pub payload_len: u64,
    pub id: [u8; 16],
    pub values: Vec<u64>,
}

/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          (reserved, 0)
/// count:u64          (number of values)
/// payload_len:u64
/// payload[payload_len]  (concatenated Flit64 chunks)
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode_frame(values: &[u64]) -> Vec<u8> {
    let mut w = FlitWriter::with_capacity(values.len());
    w.extend_from_slice(values);
    let payload = w.into_inner();

    let mut b = Vec::with_capacity(HEADER_LEN + payload.len() + TRAILER_LEN);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&0u16.to_le_bytes());
    b.extend_from_slice(&(values.len() as u64).to_le_bytes());
    b.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    b.extend_from_slice(&payload);

    let crc = crc32(&b);
    b.extend_from_slice(&crc.to_le_bytes());

    let id = blake3_16(&b);
    b.extend_from_slice(&id);
    b
}

/// Validate and decode a frame.
///
/// Checks size, magic, version, flags, crc32, blake3 id and payload length,
/// then requires exactly `count` chunks to fill the payload.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame> {
    let (id, count, payload) = split_checked(bytes)?;

    let mut values = Vec::with_capacity(count.min(payload.len() as u64) as usize);
    let mut i = 0usize;
    for k in 0..count {
        let (v, n) = decode_safe(&payload[i..])
            .map_err(|e| FlitError::Frame(format!("value {k}: {e}")))?;
        values.push(v);
        i += n;
    }
    if i != payload.len() {
        return Err(FlitError::Frame(format!(
            "payload has {} trailing bytes after {} values",
            payload.len() - i,
            count
        )));
    }

    Ok(Frame {
        count,
        payload_len: payload.len() as u64,
        id,
        values,
    })
}

/// Return the embedded content id (hex) after verifying checksums, without
/// decoding the payload.
pub fn frame_id_hex(bytes: &[u8]) -> Result<String> {
    let (id, _count, _payload) = split_checked(bytes)?;
    Ok(crate::checksum::hex16(&id))
}

/// Borrow the raw chunk payload of a verified frame.
pub fn frame_payload(bytes: &[u8]) -> Result<&[u8]> {
    let (_id, _count, payload) = split_checked(bytes)?;
    Ok(payload)
}

fn split_checked(bytes: &[u8]) -> Result<([u8; 16], u64, &[u8])> {
    if bytes.len() < HEADER_LEN + TRAILER_LEN {
        return Err(FlitError::Frame("frame too small".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(FlitError::Frame("bad frame magic".into()));
    }

    let id_off = bytes.len() - 16;
    let crc_off = id_off - 4;

    let mut id = [0u8; 16];
    id.copy_from_slice(&bytes[id_off..]);
    if blake3_16(&bytes[..id_off]) != id {
        return Err(FlitError::Frame("frame blake3 id mismatch".into()));
    }

    let crc_expected = read_u32(bytes, crc_off)?;
    if crc32(&bytes[..crc_off]) != crc_expected {
        return Err(FlitError::Frame("frame crc32 mismatch".into()));
    }

    let version = read_u16(bytes, 4)?;
    if version != VERSION {
        return Err(FlitError::Frame(format!("unsupported frame version {version}")));
    }
    let flags = read_u16(bytes, 6)?;
    if flags != 0 {
        return Err(FlitError::Frame(format!("unknown frame flags {flags:#06x}")));
    }

    let count = read_u64(bytes, 8)?;
    let payload_len = read_u64(bytes, 16)?;
    if payload_len != (crc_off - HEADER_LEN) as u64 {
        return Err(FlitError::Frame("frame payload_len mismatch".into()));
    }
    // Every chunk is at least one byte.
    if count > payload_len {
        return Err(FlitError::Frame(format!(
            "frame count {count} exceeds payload_len {payload_len}"
        )));
    }

    Ok((id, count, &bytes[HEADER_LEN..crc_off]))
}

fn read_u16(bytes: &[u8], i: usize) -> Result<u16> {
    let b = bytes
        .get(i..i + 2)
        .ok_or_else(|| FlitError::Frame("unexpected eof".into()))?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(bytes: &[u8], i: usize) -> Result<u32> {
    let b = bytes
        .get(i..i + 4)
        .ok_or_else(|| FlitError::Frame("unexpected eof".into()))?;
    let mut w = [0u8; 4];
    w.copy_from_slice(b);
    Ok(u32::from_le_bytes(w))
}

fn read_u64(bytes: &[u8], i: usize) -> Result<u64> {
    let b = bytes
        .get(i..i + 8)
        .ok_or_else(|| FlitError::Frame("unexpected eof".into()))?;
    let mut w = [0u8; 8];
    w.copy_from_slice(b);
    Ok(u64::from_le_bytes(w))
}
