//! Raw PCM stream converter.

use std::io::{ErrorKind, Read, Write};

use anyhow::{Context, Result};
use crossfeed_dsp::{CrossfeedConfig, Level, SampleFormat};

use crate::BLOCK_FRAMES;

/// Settings for a raw stream conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    pub format: SampleFormat,
    pub sample_rate: u32,
    pub level: Level,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            format: SampleFormat::default(),
            sample_rate: 44100,
            level: Level::BS2B_DEFAULT,
        }
    }
}

/// Crossfeed interleaved stereo PCM from `input` to `output` until end of input.
///
/// Partial frames are carried over between reads; a partial frame left at end
/// of input is dropped. Returns the number of frames written.
pub fn stream<R: Read, W: Write>(input: R, output: W, options: &StreamOptions) -> Result<u64> {
    let mut input = input;
    let mut output = output;

    let config = CrossfeedConfig {
        level: options.level,
        sample_rate: options.sample_rate,
    };
    let mut engine = config.build().context("Invalid stream settings")?;

    let frame = options.format.bytes_per_frame();
    let mut buffer = vec![0u8; BLOCK_FRAMES * frame];
    let mut filled = 0;
    let mut frames = 0u64;

    tracing::debug!(
        "Streaming {:?} at {} Hz, level {}",
        options.format,
        options.sample_rate,
        options.level
    );

    loop {
        let n = match input.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read input stream"),
        };
        filled += n;

        let whole = filled - filled % frame;
        if whole == 0 {
            continue;
        }

        frames += engine.process_bytes(&mut buffer[..whole], options.format) as u64;
        output
            .write_all(&buffer[..whole])
            .context("Failed to write output stream")?;

        buffer.copy_within(whole..filled, 0);
        filled -= whole;
    }

    if filled > 0 {
        tracing::debug!("Dropping {} trailing bytes of an incomplete frame", filled);
    }

    output.flush().context("Failed to flush output stream")?;
    Ok(frames)
}
