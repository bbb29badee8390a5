//! Bauer stereophonic-to-binaural (bs2b) crossfeed for headphone listening.
//!
//! Blends a delayed, low-passed share of each stereo channel into the other.
//! Coefficients come from a [`Level`] and a sample rate; the [`Crossfeed`]
//! engine keeps the per-stream filter history and processes interleaved
//! buffers of any supported [`SampleFormat`](codec::SampleFormat).

mod error;
pub use error::{Error, Result};

mod level;
pub use level::{Level, LevelParams, MAX_FCUT, MAX_FEED, MIN_FCUT, MIN_FEED};

mod coefficients;
pub use coefficients::{
    clamp_sample_rate, Coefficients, DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
};

mod state;
pub use state::FilterState;

mod engine;
pub use engine::{version, Crossfeed, LevelHandle};

mod config;
pub use config::CrossfeedConfig;

pub mod codec;
pub use codec::{ByteOrder, Encoding, IntWidth, Sample, SampleFormat};
