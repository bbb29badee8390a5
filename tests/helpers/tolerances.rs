//! Tolerance constants for filter testing.
//!
//! Different operations require different precision levels.

/// Floating point rounding errors (exact recurrences, f64 passthrough).
pub const FLOAT_EPSILON: f64 = 1e-6;

/// DSP processing tolerance (steady-state convergence, f32 storage).
pub const DSP_EPSILON: f64 = 1e-4;

/// Audio perceptual tolerance (~-60dB, inaudible differences).
pub const PERCEPTUAL_EPSILON: f64 = 0.001;

/// Silence threshold (~-80dB).
/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f64 = 0.0001;

/// 16-bit quantization step size.
pub const INT16_EPSILON: f64 = 1.0 / 32767.0;

/// 24-bit quantization step size.
pub const INT24_EPSILON: f64 = 1.0 / 8388607.0;
