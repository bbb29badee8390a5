//! WAV file converter.

use std::io::{Seek, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use crossfeed_dsp::{Crossfeed, CrossfeedConfig, IntWidth, Level};
use hound::{SampleFormat as WavSampleFormat, WavReader, WavWriter};

use crate::BLOCK_FRAMES;

/// Outcome of a file conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub frames: u64,
    pub sample_rate: u32,
    pub level: Level,
}

/// Crossfeed a stereo WAV file into `output`, keeping the input's sample format.
pub fn convert(input: &Path, output: &Path, level: Level) -> Result<ConvertSummary> {
    if input == output {
        bail!("Input and output filenames are the same");
    }

    let mut reader = WavReader::open(input)
        .with_context(|| format!("Not able to open input file {}", input.display()))?;
    let spec = reader.spec();

    if spec.channels != 2 {
        bail!(
            "Input file {} is not stereo ({} channels)",
            input.display(),
            spec.channels
        );
    }

    let config = CrossfeedConfig {
        level,
        sample_rate: spec.sample_rate,
    };
    let mut engine = config
        .build()
        .with_context(|| format!("Not supported sample rate '{}'", spec.sample_rate))?;

    let mut writer = WavWriter::create(output, spec)
        .with_context(|| format!("Not able to open output file {}", output.display()))?;

    tracing::info!(
        "Converting {} -> {} ({} Hz, {}-bit {:?})",
        input.display(),
        output.display(),
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let frames = match spec.sample_format {
        WavSampleFormat::Float => pump(
            reader.samples::<f32>(),
            &mut writer,
            &mut engine,
            |s| s as f64,
            |v| v as f32,
        )?,
        WavSampleFormat::Int => {
            let width = IntWidth::from_bits(spec.bits_per_sample)?;
            pump(
                reader.samples::<i32>(),
                &mut writer,
                &mut engine,
                |s| width.normalize(s),
                |v| width.denormalize(v),
            )?
        }
    };

    writer
        .finalize()
        .with_context(|| format!("Failed to finalize {}", output.display()))?;

    tracing::info!("Processed {} frames", frames);

    Ok(ConvertSummary {
        frames,
        sample_rate: engine.sample_rate(),
        level: engine.level(),
    })
}

/// Stream samples through the engine block by block. Returns frames processed.
fn pump<T, W>(
    samples: impl Iterator<Item = hound::Result<T>>,
    writer: &mut WavWriter<W>,
    engine: &mut Crossfeed,
    decode: impl Fn(T) -> f64,
    encode: impl Fn(f64) -> T,
) -> Result<u64>
where
    T: hound::Sample,
    W: Write + Seek,
{
    let mut samples = samples;
    let mut block: Vec<f64> = Vec::with_capacity(BLOCK_FRAMES * 2);
    let mut frames = 0u64;

    loop {
        block.clear();
        for sample in samples.by_ref().take(BLOCK_FRAMES * 2) {
            block.push(decode(sample.context("Failed to read input samples")?));
        }
        if block.is_empty() {
            break;
        }

        frames += engine.process(&mut block[..]) as u64;

        for &value in &block {
            writer
                .write_sample(encode(value))
                .context("Failed to write output samples")?;
        }
    }

    Ok(frames)
}
