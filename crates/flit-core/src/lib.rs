pub mod error;

pub mod checksum;
pub mod flit;
pub mod frame;
pub mod leb128;
pub mod stats;

pub use crate::error::{FlitError, Result};
pub use crate::flit::{
    decode_fast, decode_safe, encode, FlitReader, FlitWriter, LONG_FORM_THRESHOLD,
    MAX_ENCODED_LEN,
};
pub use crate::frame::{decode_frame, encode_frame, Frame};
pub use crate::stats::LengthHistogram;
