//! Test helpers and fixtures for crossfeed integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Exact recurrences
//! - `DSP_EPSILON` (1e-4): Steady-state convergence
//! - `PERCEPTUAL_EPSILON` (0.001): Perceptual equivalence (-60dB)
//! - `SILENCE_THRESHOLD` (0.0001): Silence detection (-80dB)

#![allow(dead_code)]

pub mod tolerances;

use crossfeed::prelude::*;

/// Default test sample rate
pub const TEST_SAMPLE_RATE: u32 = 44100;

/// Standard block size for deterministic testing
pub const TEST_BLOCK_FRAMES: usize = 512;

/// Create an engine at the test sample rate.
pub fn test_engine(level: Level) -> Crossfeed {
    Crossfeed::builder()
        .level(level)
        .sample_rate(TEST_SAMPLE_RATE)
        .build()
        .expect("Failed to create test engine")
}

/// Interleave two channels into one stereo buffer.
pub fn interleave(left: &[f64], right: &[f64]) -> Vec<f64> {
    left.iter()
        .zip(right)
        .flat_map(|(&l, &r)| [l, r])
        .collect()
}

/// Split an interleaved stereo buffer into two channels.
pub fn deinterleave(buffer: &[f64]) -> (Vec<f64>, Vec<f64>) {
    buffer
        .chunks_exact(2)
        .map(|frame| (frame[0], frame[1]))
        .unzip()
}

/// Generate a sine wave at the given frequency.
pub fn generate_sine(frequency: f64, amplitude: f64, sample_rate: u32, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin()
        })
        .collect()
}

/// Generate an impulse (single 1.0 sample at position).
pub fn generate_impulse(num_samples: usize, position: usize) -> Vec<f64> {
    let mut samples = vec![0.0; num_samples];
    if position < num_samples {
        samples[position] = 1.0;
    }
    samples
}

/// Generate a DC signal.
pub fn generate_dc(value: f64, num_samples: usize) -> Vec<f64> {
    vec![value; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f64> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f64 / u32::MAX as f64) * 4.0 - 1.0
        })
        .collect()
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0, |acc, s| acc.max(s.abs()))
}

/// Check if a signal is silent (all samples below threshold).
pub fn is_silent(samples: &[f64], threshold: f64) -> bool {
    samples.iter().all(|s| s.abs() < threshold)
}

/// Assert two signals match sample by sample.
pub fn assert_signals_equal(a: &[f64], b: &[f64], epsilon: f64, context: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", context);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= epsilon,
            "{}: sample {} differs: {} vs {} (epsilon {})",
            context,
            i,
            x,
            y,
            epsilon
        );
    }
}
