use anyhow::Context;
use clap::Args;
use flit_core::{flit, leb128, LengthHistogram};
use std::io::Cursor;
use tracing::debug;

use crate::io::ints;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input text file of integers
    #[arg(long)]
    pub r#in: String,

    /// Also report zstd sizes of the Flit64 and LEB128 streams
    #[arg(long)]
    pub zstd: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let values = ints::read_ints_file(&args.r#in)?;
    let h = LengthHistogram::from_values(&values);
    let fixed = h.fixed_width_bytes();

    let flit_bytes = flit::encode_all(&values);
    let leb_bytes = leb128::encode_all(&values);

    // Both streams must give the input back before their sizes mean anything.
    let flit_back = flit::decode_all(&flit_bytes).context("flit64 stream roundtrip")?;
    let leb_back = leb128::decode_all(&leb_bytes).context("leb128 stream roundtrip")?;
    if flit_back != values || leb_back != values {
        anyhow::bail!("roundtrip mismatch: decoded values differ from input");
    }
    debug!(
        flit = flit_bytes.len(),
        leb128 = leb_bytes.len(),
        "streams built and verified"
    );

    let flit_n = flit_bytes.len() as u64;
    let leb_n = leb_bytes.len() as u64;

    eprintln!("--- analyze ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("values          = {}", h.values);
    eprintln!("flit64_bytes    = {}", flit_n);
    eprintln!("leb128_bytes    = {}", leb_n);
    eprintln!("fixed_u64_bytes = {}", fixed);
    eprintln!("mean_len        = {:.3}", h.mean_len());
    eprintln!("roundtrip       = ok (flit64 + leb128)");
    eprintln!("ratio_fixed/flit = {:.4}x", ratio(fixed, flit_n));
    eprintln!("ratio_leb/flit   = {:.4}x", ratio(leb_n, flit_n));

    if args.zstd {
        let zf = zstd_size(&flit_bytes, args.zstd_level)?;
        let zl = zstd_size(&leb_bytes, args.zstd_level)?;
        eprintln!("--- zstd ---");
        eprintln!("zstd_level      = {}", args.zstd_level);
        eprintln!("zstd_flit64     = {}", zf);
        eprintln!("zstd_leb128     = {}", zl);
        eprintln!("ratio_flit/zstd = {:.4}x", ratio(flit_n, zf as u64));
    }

    eprintln!("--- length classes ---");
    for (i, &c) in h.counts.iter().enumerate() {
        let pct = if h.values == 0 {
            0.0
        } else {
            (c as f64) * 100.0 / (h.values as f64)
        };
        eprintln!("len={} count={} ({:.3}%)", i + 1, c, pct);
    }

    Ok(())
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        (num as f64) / (den as f64)
    }
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    let out = zstd::stream::encode_all(Cursor::new(bytes), level)?;
    Ok(out.len())
}
