use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlitError>;

#[derive(Debug, Error)]
pub enum FlitError {
    #[error("truncated chunk: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("non-canonical long form: {value:#x} fits a short chunk")]
    NonCanonical { value: u64 },

    #[error("frame error: {0}")]
    Frame(String),

    #[error("validation error: {0}")]
    Validation(String),
}
