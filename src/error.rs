//! Centralized error type for the crossfeed umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("DSP: {0}")]
    Dsp(#[from] crossfeed_dsp::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
