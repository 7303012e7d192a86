use clap::Args;
use flit_core::LengthHistogram;
use tracing::{debug, info};

use crate::io::{flt, ints};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input text file of integers (whitespace separated, decimal or 0x hex)
    #[arg(long)]
    pub r#in: String,

    /// Output path (.flt frame, or raw chunk stream with --raw)
    #[arg(long)]
    pub out: String,

    /// Write bare concatenated chunks instead of a checksummed frame
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let values = ints::read_ints_file(&args.r#in)?;
    debug!(count = values.len(), input = %args.r#in, "parsed integers");

    let written = if args.raw {
        flt::write_raw_file(&args.out, &values)?
    } else {
        flt::write_frame_file(&args.out, &values)?
    };
    info!(bytes = written, raw = args.raw, "encode finished");

    let h = LengthHistogram::from_values(&values);
    eprintln!(
        "encode ok: out={} values={} payload_bytes={} file_bytes={} mean_len={:.3} raw={}",
        args.out,
        h.values,
        h.bytes,
        written,
        h.mean_len(),
        args.raw
    );
    Ok(())
}
