// crates/flit-cli/src/cmd/mod.rs

pub mod analyze;
pub mod decode;
pub mod encode;
pub mod generate;
pub mod inspect;
