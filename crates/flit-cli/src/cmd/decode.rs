use anyhow::Context;
use clap::Args;
use flit_core::flit::{decode_all, decode_fast, MAX_ENCODED_LEN};
use tracing::{debug, warn};

use crate::io::{flt, ints};

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input path (.flt frame, or raw chunk stream with --raw)
    #[arg(long)]
    pub r#in: String,

    /// Output text file, one integer per line
    #[arg(long)]
    pub out: String,

    /// Input is bare concatenated chunks, not a frame
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Raw only: trust the input and use the unchecked decoder
    #[arg(long, default_value_t = false)]
    pub fast: bool,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    if args.fast && !args.raw {
        warn!("--fast only applies to --raw input; frames are always checked");
    }

    let values = if args.raw {
        let bytes = std::fs::read(&args.r#in).with_context(|| format!("read {}", args.r#in))?;
        debug!(bytes = bytes.len(), fast = args.fast, "decoding raw chunk stream");
        if args.fast {
            decode_trusted(&bytes)?
        } else {
            decode_all(&bytes).with_context(|| format!("decode raw chunks: {}", args.r#in))?
        }
    } else {
        flt::read_frame_file(&args.r#in)?.values
    };

    ints::write_ints_file(&args.out, &values)?;
    eprintln!("decode ok: out={} values={}", args.out, values.len());
    Ok(())
}

/// Unchecked sequential decode over a zero-padded copy.
///
/// The padding keeps the 9-byte reads in bounds; a stream whose last chunk
/// overruns the real end is reported instead of yielding padding bytes.
fn decode_trusted(bytes: &[u8]) -> anyhow::Result<Vec<u64>> {
    let mut padded = Vec::with_capacity(bytes.len() + MAX_ENCODED_LEN);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + MAX_ENCODED_LEN, 0);

    let mut out = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        let (v, n) = decode_fast(&padded[i..]);
        out.push(v);
        i += n;
    }
    if i != bytes.len() {
        anyhow::bail!(
            "last chunk overruns input: ended at {} of {} bytes",
            i,
            bytes.len()
        );
    }
    Ok(out)
}
