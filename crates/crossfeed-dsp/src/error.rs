//! Error types for crossfeed-dsp

use thiserror::Error;

/// Errors raised by the strict constructors and parsers.
///
/// The filter itself never fails: out-of-range rates and unknown levels are
/// substituted with defaults by the lenient setters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid crossfeed level: {0}")]
    InvalidLevel(String),

    #[error("Invalid sample rate: {0} Hz. Must be between 2000 and 384000 Hz")]
    InvalidSampleRate(u32),

    #[error("Invalid sample format: {0}")]
    InvalidFormat(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
