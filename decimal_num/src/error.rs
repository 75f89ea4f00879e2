use thiserror::Error;

/// Errors raised by the digit utilities and the arithmetic engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty text, a non-digit character, or a sequence element outside `0..=9`.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Two sequences that must line up do not, or a bound was exceeded.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
