//! Crossfeed engine: coefficients + filter history for one stereo stream.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::codec::{Sample, SampleFormat};
use crate::coefficients::{clamp_sample_rate, Coefficients, DEFAULT_SAMPLE_RATE};
use crate::{FilterState, Level};

/// No pending level request.
const NO_REQUEST: u32 = 0;

/// Bauer stereophonic-to-binaural crossfeed.
///
/// Each channel is split into a one-pole low-pass leg and a one-pole
/// high-boost leg; the output of each channel is its own high-boost leg plus
/// the opposite channel's low-pass leg, scaled by `gain` and clipped to
/// `[-1.0, 1.0]`.
///
/// One instance carries the history of one stream. Processing takes
/// `&mut self`, so a stream shared between threads needs external locking;
/// independent instances can run in parallel.
///
/// ```
/// use crossfeed_dsp::{Crossfeed, Level};
///
/// let mut bs2b = Crossfeed::new();
/// bs2b.set_sample_rate(48000);
/// bs2b.set_level(Level::CHU_MOY);
///
/// let mut block = [0i16; 2 * 256];
/// let frames = bs2b.process(&mut block);
/// assert_eq!(frames, 256);
/// ```
#[derive(Debug)]
pub struct Crossfeed {
    level: Level,
    sample_rate: u32,
    coeffs: Coefficients,
    state: FilterState,
    pending_level: Arc<AtomicU32>,
}

impl Default for Crossfeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Crossfeed {
    /// High-easy level at 44100 Hz, cleared history.
    pub fn new() -> Self {
        Self::with_params(Level::default(), DEFAULT_SAMPLE_RATE)
    }

    /// Lenient constructor: invalid levels and rates are substituted.
    pub fn with_params(level: Level, sample_rate: u32) -> Self {
        let level = level.normalized();
        let sample_rate = clamp_sample_rate(sample_rate);

        Self {
            level,
            sample_rate,
            coeffs: Coefficients::resolve(level, sample_rate),
            state: FilterState::default(),
            pending_level: Arc::new(AtomicU32::new(NO_REQUEST)),
        }
    }

    /// Change the level. Recomputes coefficients, keeps the filter history.
    pub fn set_level(&mut self, level: Level) {
        if level == self.level {
            return;
        }

        let resolved = level.normalized();
        if resolved != level {
            tracing::debug!("Unknown crossfeed level {:?}, using {}", level, resolved);
        }

        self.level = resolved;
        self.coeffs = Coefficients::resolve(self.level, self.sample_rate);
        tracing::debug!("Crossfeed level set to {}", self.level);
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Change the sample rate. Recomputes coefficients and clears the history.
    ///
    /// Out-of-range rates are replaced by 44100 Hz.
    pub fn set_sample_rate(&mut self, sample_rate: u32) {
        if sample_rate == self.sample_rate {
            return;
        }

        let clamped = clamp_sample_rate(sample_rate);
        if clamped != sample_rate {
            tracing::debug!(
                "Sample rate {} Hz out of range, using {} Hz",
                sample_rate,
                clamped
            );
        }

        self.sample_rate = clamped;
        self.coeffs = Coefficients::resolve(self.level, self.sample_rate);
        self.state.clear();
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Clear the filter history.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// True when the filter history is all zero.
    pub fn is_quiescent(&self) -> bool {
        self.state.is_clear()
    }

    /// Handle for requesting level changes from another thread.
    pub fn level_handle(&self) -> LevelHandle {
        LevelHandle {
            pending: Arc::clone(&self.pending_level),
        }
    }

    /// Crossfeed one normalized frame in place: `[0]` left, `[1]` right.
    ///
    /// Does not pick up [`LevelHandle`] requests; those apply at block
    /// boundaries in [`process`](Self::process) and [`process_bytes`](Self::process_bytes).
    #[inline]
    pub fn process_frame(&mut self, sample: &mut [f64; 2]) {
        let c = &self.coeffs;
        let s = &mut self.state;

        // Low-pass
        s.lo[0] = c.a0_lo * sample[0] + c.b1_lo * s.lo[0];
        s.lo[1] = c.a0_lo * sample[1] + c.b1_lo * s.lo[1];

        // High-boost, then remember the raw input
        s.hi[0] = c.a0_hi * sample[0] + c.a1_hi * s.asis[0] + c.b1_hi * s.hi[0];
        s.hi[1] = c.a0_hi * sample[1] + c.a1_hi * s.asis[1] + c.b1_hi * s.hi[1];
        s.asis = *sample;

        // Crossfeed the low-pass legs
        sample[0] = (s.hi[0] + s.lo[1]) * c.gain;
        sample[1] = (s.hi[1] + s.lo[0]) * c.gain;

        sample[0] = sample[0].clamp(-1.0, 1.0);
        sample[1] = sample[1].clamp(-1.0, 1.0);
    }

    /// Crossfeed one frame, returning the result.
    #[inline]
    pub fn tick(&mut self, frame: [f64; 2]) -> [f64; 2] {
        let mut frame = frame;
        self.process_frame(&mut frame);
        frame
    }

    /// Process an interleaved stereo buffer of native samples in place.
    ///
    /// Returns the number of frames processed; an odd trailing sample is left untouched.
    pub fn process<S: Sample>(&mut self, interleaved: &mut [S]) -> usize {
        self.apply_pending_level();

        let mut frames = 0;
        for pair in interleaved.chunks_exact_mut(2) {
            let mut frame = [pair[0].to_f64(), pair[1].to_f64()];
            self.process_frame(&mut frame);
            pair[0] = S::from_f64(frame[0]);
            pair[1] = S::from_f64(frame[1]);
            frames += 1;
        }
        frames
    }

    /// Process an interleaved stereo byte buffer in the given wire format.
    ///
    /// Returns the number of frames processed; trailing bytes that do not
    /// form a whole frame are left untouched.
    pub fn process_bytes(&mut self, buffer: &mut [u8], format: SampleFormat) -> usize {
        self.apply_pending_level();

        let width = format.bytes_per_sample();
        let mut frames = 0;
        for chunk in buffer.chunks_exact_mut(format.bytes_per_frame()) {
            let (left, right) = chunk.split_at_mut(width);
            let mut frame = [format.decode(left), format.decode(right)];
            self.process_frame(&mut frame);
            format.encode(frame[0], left);
            format.encode(frame[1], right);
            frames += 1;
        }
        frames
    }

    #[inline]
    fn apply_pending_level(&mut self) {
        let raw = self.pending_level.swap(NO_REQUEST, Ordering::Acquire);
        if raw != NO_REQUEST {
            self.set_level(Level::from_raw(raw));
        }
    }
}

/// Cloneable, thread-safe request channel for level changes.
///
/// The owning engine picks up the latest request at the start of its next
/// `process`/`process_bytes` call, one atomic swap per block. The per-frame
/// calls `process_frame` and `tick` ignore pending requests. Single-threaded
/// callers can ignore the handle and use `set_level` directly.
#[derive(Debug, Clone)]
pub struct LevelHandle {
    pending: Arc<AtomicU32>,
}

impl LevelHandle {
    pub fn request(&self, level: Level) {
        self.pending.store(level.to_raw(), Ordering::Release);
    }

    /// Whether a request is waiting to be applied.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire) != NO_REQUEST
    }
}

/// Library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
