// crates/flit-core/src/flit/mod.rs

pub mod bitscan;
pub mod codec;
pub mod stream;

pub use codec::{
    decode_fast, decode_fast_advance, decode_safe, decode_safe_advance, encode, encode_to_array,
    encoded_len, LONG_FORM_THRESHOLD, MAX_ENCODED_LEN,
};
pub use stream::{decode_all, encode_all, FlitReader, FlitWriter};
