//! Filter coefficient derivation.

use std::f64::consts::PI;

use crate::Level;

/// Lowest sample rate the filter accepts (Hz).
pub const MIN_SAMPLE_RATE: u32 = 2000;
/// Highest sample rate the filter accepts (Hz).
pub const MAX_SAMPLE_RATE: u32 = 384000;
/// Substituted for any out-of-range sample rate (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Replace an out-of-range sample rate with [`DEFAULT_SAMPLE_RATE`].
#[inline]
pub fn clamp_sample_rate(sample_rate: u32) -> u32 {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        sample_rate
    } else {
        DEFAULT_SAMPLE_RATE
    }
}

/// Single-pole IIR coefficients for both legs plus the output gain.
///
/// Low-pass:   `O[n] = a0_lo*I[n] + b1_lo*O[n-1]`
/// High-boost: `O[n] = a0_hi*I[n] + a1_hi*I[n-1] + b1_hi*O[n-1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a0_lo: f64,
    pub b1_lo: f64,
    pub a0_hi: f64,
    pub a1_hi: f64,
    pub b1_hi: f64,
    /// Compensates the DC gain of the summed legs.
    pub gain: f64,
}

impl Coefficients {
    /// Derive coefficients for a level at a sample rate. Never fails.
    pub fn resolve(level: Level, sample_rate: u32) -> Self {
        let sample_rate = clamp_sample_rate(sample_rate) as f64;
        let p = level.params();

        let x = pole(p.fc_lo, sample_rate);
        let b1_lo = x;
        let a0_lo = p.g_lo * (1.0 - x);

        let x = pole(p.fc_hi, sample_rate);
        let b1_hi = x;
        let a0_hi = 1.0 - p.g_hi * (1.0 - x);
        let a1_hi = -x;

        Self {
            a0_lo,
            b1_lo,
            a0_hi,
            a1_hi,
            b1_hi,
            gain: 1.0 / (1.0 - p.g_hi + p.g_lo),
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::resolve(Level::default(), DEFAULT_SAMPLE_RATE)
    }
}

/// Exponential pole placement: `exp(-2π·fc/fs)`.
#[inline]
fn pole(fc: f64, sample_rate: f64) -> f64 {
    (-2.0 * PI * fc / sample_rate).exp()
}
