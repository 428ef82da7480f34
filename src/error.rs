//! Error types for generation and preference persistence.

use std::io;

use thiserror::Error;

/// Invalid or contradictory generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("length must not be negative (got {0})")]
    NegativeLength(i64),

    #[error("length must be a finite whole number (got {0:?})")]
    NonFiniteLength(String),

    #[error("length {length} is out of range ({min} to {max})")]
    LengthOutOfRange { length: i64, min: i64, max: i64 },

    /// Separator is empty or would merge into the words it joins.
    #[error("word separator {0:?} must be non-empty and contain no letters, digits or control characters")]
    InvalidSeparator(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The OS random source failed. Never retried with a weaker source.
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),

    #[error("cannot draw from an empty range")]
    EmptyRange,

    #[error("word list contains no usable words")]
    EmptyWordList,

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
