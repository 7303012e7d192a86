// crates/flit-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "flit")]
#[command(about = "Flit64 varint CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a text list of integers into a .flt frame (or raw chunks)
    Encode(cmd::encode::EncodeArgs),

    /// Decode a .flt frame (or raw chunks) back to one integer per line
    Decode(cmd::decode::DecodeArgs),

    /// Inspect a .flt frame (magic/crc/id, counts, length classes)
    Inspect(cmd::inspect::InspectArgs),

    /// Compare Flit64 size against LEB128 and fixed-width u64
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Generate deterministic test integers (uniform bit length)
    Gen(cmd::generate::GenArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FLIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Gen(args) => cmd::generate::run(args),
    }
}
