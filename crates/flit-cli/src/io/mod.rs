// crates/flit-cli/src/io/mod.rs

pub mod flt;
pub mod ints;
