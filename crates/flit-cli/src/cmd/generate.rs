use clap::Args;
use tracing::debug;

use crate::io::ints;

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Number of integers to emit
    #[arg(long, default_value_t = 1024)]
    pub count: usize,

    /// Seed for the splitmix64 stream
    #[arg(long, default_value_t = 0x1234_5678_9abc_def0)]
    pub seed: u64,

    /// Cap on bit length (1..=64); each value draws its width from 1..=max_bits
    #[arg(long, default_value_t = 64)]
    pub max_bits: u32,

    /// Output text file, one integer per line
    #[arg(long)]
    pub out: String,
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    if args.max_bits == 0 || args.max_bits > 64 {
        anyhow::bail!("--max-bits must be in 1..=64, got {}", args.max_bits);
    }

    let mut state = args.seed;
    let values: Vec<u64> = (0..args.count)
        .map(|_| rand_width_u64(&mut state, args.max_bits))
        .collect();
    debug!(count = values.len(), seed = args.seed, "generated values");

    ints::write_ints_file(&args.out, &values)?;
    eprintln!(
        "gen ok: out={} count={} seed={} max_bits={}",
        args.out, args.count, args.seed, args.max_bits
    );
    Ok(())
}

fn splitmix64(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn rand_width_u64(state: &mut u64, max_bits: u32) -> u64 {
    let bits = (splitmix64(state) % max_bits as u64) as u32 + 1;
    let r = splitmix64(state);
    if bits == 64 {
        r
    } else {
        r & ((1u64 << bits) - 1)
    }
}
