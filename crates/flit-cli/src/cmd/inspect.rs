use anyhow::Context;
use clap::Args;
use flit_core::checksum::hex16;
use flit_core::frame;
use flit_core::LengthHistogram;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .flt path
    #[arg(long)]
    pub r#in: String,

    /// Show the first N decoded values
    #[arg(long, default_value_t = 8)]
    pub head: usize,

    /// If set, dump the raw chunk payload to this file path
    #[arg(long)]
    pub dump_payload: Option<String>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in).with_context(|| format!("read {}", args.r#in))?;
    let f = frame::decode_frame(&bytes).with_context(|| format!("decode frame: {}", args.r#in))?;
    let h = LengthHistogram::from_values(&f.values);

    eprintln!("--- inspect ---");
    eprintln!("file           = {}", args.r#in);
    eprintln!("frame_ok       = true (magic + crc32 + blake3 verified)");
    eprintln!("file_bytes     = {}", bytes.len());
    eprintln!("frame_id       = {}", hex16(&f.id));
    eprintln!("values         = {}", f.count);
    eprintln!("payload_bytes  = {}", f.payload_len);
    eprintln!("mean_len       = {:.3}", h.mean_len());

    eprintln!("--- length classes ---");
    for (i, &c) in h.counts.iter().enumerate() {
        if c > 0 {
            eprintln!("len={} count={}", i + 1, c);
        }
    }

    let n = args.head.min(f.values.len());
    if n > 0 {
        eprintln!("--- head {} ---", n);
        for (i, v) in f.values.iter().take(n).enumerate() {
            eprintln!("#{:>3} {} (0x{:X})", i, v, v);
        }
    }

    if let Some(out) = args.dump_payload.as_deref() {
        let payload = frame::frame_payload(&bytes)?;
        std::fs::write(out, payload).with_context(|| format!("write payload: {out}"))?;
        eprintln!("dump_payload   = {} ({} bytes)", out, payload.len());
    }

    Ok(())
}
