//! # Crossfeed - Bauer stereophonic-to-binaural filter
//!
//! Makes stereo recordings easier on the ears over headphones by feeding a
//! delayed, low-passed share of each channel into the other.
//!
//! ## Architecture
//!
//! - **crossfeed-dsp** - Levels, coefficients, the filter engine and the PCM sample codec
//! - **crossfeed-cli** - `crossfeed convert` (WAV files) and `crossfeed stream` (raw PCM pipes)
//!
//! ## Quick Start
//!
//! ```
//! use crossfeed::prelude::*;
//!
//! let mut bs2b = Crossfeed::builder()
//!     .level(Level::CHU_MOY)
//!     .sample_rate(48000)
//!     .build()?;
//!
//! let mut block = vec![0.0f32; 2 * 64];
//! bs2b.process(&mut block);
//!
//! // Wire-format buffers go through the codec
//! let mut bytes = vec![0u8; 4 * 64];
//! bs2b.process_bytes(&mut bytes, SampleFormat::int(IntWidth::W16, true, ByteOrder::Big));
//! # Ok::<(), crossfeed::Error>(())
//! ```

/// Re-export of crossfeed-dsp for direct access
pub use crossfeed_dsp as dsp;

pub use crossfeed_dsp::codec;

// Engine and parameters
pub use crossfeed_dsp::{
    clamp_sample_rate, version, Coefficients, Crossfeed, CrossfeedConfig, FilterState, Level,
    LevelHandle, LevelParams, DEFAULT_SAMPLE_RATE, MAX_FCUT, MAX_FEED, MAX_SAMPLE_RATE, MIN_FCUT,
    MIN_FEED, MIN_SAMPLE_RATE,
};

// Sample codec
pub use crossfeed_dsp::{ByteOrder, Encoding, IntWidth, Sample, SampleFormat};

mod builder;
pub use builder::CrossfeedBuilder;

mod error;
pub use error::{Error, Result};

/// Builder entry point on the engine type.
pub trait CrossfeedExt {
    fn builder() -> CrossfeedBuilder;
}

impl CrossfeedExt for Crossfeed {
    fn builder() -> CrossfeedBuilder {
        CrossfeedBuilder::default()
    }
}

pub mod prelude {
    pub use crate::{
        ByteOrder, Crossfeed, CrossfeedBuilder, CrossfeedExt, Encoding, Error, IntWidth, Level,
        LevelHandle, Result, Sample, SampleFormat,
    };
}
