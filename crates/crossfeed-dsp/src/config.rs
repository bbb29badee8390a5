//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::coefficients::{DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};
use crate::{Crossfeed, Error, Level, Result};

/// Configuration for a crossfeed engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfeedConfig {
    pub level: Level,
    pub sample_rate: u32,
}

impl Default for CrossfeedConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl CrossfeedConfig {
    /// Strict check, unlike the engine setters which substitute defaults.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if !self.level.is_valid() {
            return Err(Error::InvalidLevel(format!("{:?}", self.level)));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Crossfeed> {
        self.validate()?;
        Ok(Crossfeed::with_params(self.level, self.sample_rate))
    }
}
