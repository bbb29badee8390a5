//! Builder for configuring and constructing a `Crossfeed` engine.

use crate::{Crossfeed, CrossfeedConfig, Level, Result, DEFAULT_SAMPLE_RATE};

/// Unlike [`Crossfeed::with_params`], `build()` rejects out-of-range sample
/// rates and custom levels instead of substituting defaults.
///
/// # Example
///
/// ```
/// use crossfeed::prelude::*;
///
/// let engine = CrossfeedBuilder::default()
///     .level(Level::JAN_MEIER)
///     .sample_rate(96000)
///     .build()?;
/// assert_eq!(engine.sample_rate(), 96000);
///
/// assert!(CrossfeedBuilder::default().sample_rate(1000).build().is_err());
/// # Ok::<(), crossfeed::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CrossfeedBuilder {
    level: Level,
    sample_rate: u32,
}

impl Default for CrossfeedBuilder {
    fn default() -> Self {
        Self {
            level: Level::default(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl CrossfeedBuilder {
    /// Crossfeed level (default: high-easy preset).
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Stream sample rate in Hz (default: 44100).
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn build(self) -> Result<Crossfeed> {
        let config = CrossfeedConfig {
            level: self.level,
            sample_rate: self.sample_rate,
        };
        Ok(config.build()?)
    }
}
