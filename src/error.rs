//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Wraps decode and I/O failures from the imaging stack and provides semantic
//! variants for encoding, channel recombination and argument validation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("Channel dimensions mismatch: expected {expected:?}, got {actual:?}")]
    ChannelMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Output path {0} is the same as the input path")]
    SamePath(PathBuf),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    pub fn invalid<V: std::fmt::Display>(arg: &'static str, value: V) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.to_string(),
        }
    }
}
