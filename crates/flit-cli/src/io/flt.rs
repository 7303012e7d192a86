// crates/flit-cli/src/io/flt.rs

use anyhow::Context;
use flit_core::frame::{self, Frame};

pub fn write_frame_file(path: &str, values: &[u64]) -> anyhow::Result<usize> {
    let bytes = frame::encode_frame(values);
    std::fs::write(path, &bytes).with_context(|| format!("write frame: {path}"))?;
    Ok(bytes.len())
}

/// Read and fully validate a frame file.
pub fn read_frame_file(path: &str) -> anyhow::Result<Frame> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let f = frame::decode_frame(&bytes).with_context(|| format!("decode frame: {path}"))?;
    Ok(f)
}

pub fn write_raw_file(path: &str, values: &[u64]) -> anyhow::Result<usize> {
    let bytes = flit_core::flit::encode_all(values);
    std::fs::write(path, &bytes).with_context(|| format!("write raw chunks: {path}"))?;
    Ok(bytes.len())
}
