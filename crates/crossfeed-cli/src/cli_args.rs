//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use crossfeed_dsp::{ByteOrder, IntWidth, Level, SampleFormat};

/// Bauer stereophonic-to-binaural crossfeed for headphone listening
#[derive(Parser, Debug)]
#[command(name = "crossfeed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crossfeed a stereo WAV file into a new WAV file
    Convert {
        /// Crossfeed level: d (700 Hz, 4.5 dB), c (Chu Moy, 700 Hz, 6.0 dB),
        /// m (Jan Meier, 650 Hz, 9.5 dB), FEED:FCUT (feed in 0.1 dB 10..150,
        /// cut 300..2000 Hz) or a preset name (low, middle, high, low-easy,
        /// middle-easy, high-easy)
        #[arg(short, long, default_value = "d")]
        level: Level,

        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,
    },

    /// Crossfeed raw interleaved stereo PCM from stdin to stdout
    Stream {
        /// Unsigned integer samples (default is signed)
        #[arg(short, long)]
        unsigned: bool,

        /// Byte order
        #[arg(short, long, value_enum, default_value_t = Endian::Native)]
        endian: Endian,

        /// Bits per integer sample
        #[arg(short, long, default_value = "16", value_parser = parse_bits)]
        bits: IntWidth,

        /// Floating point samples instead of integers
        #[arg(short, long, value_enum)]
        float: Option<FloatKind>,

        /// Sample rate in kHz
        #[arg(short, long, default_value_t = 44.1)]
        rate: f64,

        /// Crossfeed level (same values as for `convert`)
        #[arg(short, long, default_value = "d")]
        level: Level,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    #[value(name = "n", alias = "native")]
    Native,
    #[value(name = "b", alias = "big")]
    Big,
    #[value(name = "l", alias = "little")]
    Little,
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Native => ByteOrder::Native,
            Endian::Big => ByteOrder::Big,
            Endian::Little => ByteOrder::Little,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatKind {
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
}

fn parse_bits(s: &str) -> Result<IntWidth, String> {
    let bits: u16 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    IntWidth::from_bits(bits).map_err(|e| e.to_string())
}

/// Wire format selected by the `stream` flags.
pub fn stream_format(
    unsigned: bool,
    endian: Endian,
    bits: IntWidth,
    float: Option<FloatKind>,
) -> SampleFormat {
    let order = ByteOrder::from(endian);
    match float {
        Some(FloatKind::Float) => SampleFormat::float32(order),
        Some(FloatKind::Double) => SampleFormat::float64(order),
        None => SampleFormat::int(bits, !unsigned, order),
    }
}

/// Convert a kHz rate argument to Hz.
pub fn khz_to_hz(khz: f64) -> u32 {
    (khz * 1000.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_defaults() {
        let cli = Cli::parse_from(["crossfeed", "stream"]);
        match cli.command {
            Commands::Stream {
                unsigned,
                endian,
                bits,
                float,
                rate,
                level,
            } => {
                assert_eq!(
                    stream_format(unsigned, endian, bits, float),
                    SampleFormat::default()
                );
                assert_eq!(khz_to_hz(rate), 44100);
                assert_eq!(level, Level::BS2B_DEFAULT);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_stream_flags() {
        let cli = Cli::parse_from([
            "crossfeed", "stream", "-u", "-e", "b", "-b", "24", "-r", "96", "-l", "m",
        ]);
        match cli.command {
            Commands::Stream {
                unsigned,
                endian,
                bits,
                float,
                rate,
                level,
            } => {
                assert_eq!(
                    stream_format(unsigned, endian, bits, float),
                    SampleFormat::int(IntWidth::W24, false, ByteOrder::Big)
                );
                assert_eq!(khz_to_hz(rate), 96000);
                assert_eq!(level, Level::JAN_MEIER);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_bits_and_level() {
        assert!(Cli::try_parse_from(["crossfeed", "stream", "-b", "12"]).is_err());
        assert!(Cli::try_parse_from(["crossfeed", "stream", "-l", "5:5"]).is_err());
        assert!(Cli::try_parse_from(["crossfeed", "convert", "in.wav"]).is_err());
    }

    #[test]
    fn test_convert_custom_level() {
        let cli = Cli::parse_from(["crossfeed", "-v", "convert", "-l", "60:700", "a.wav", "b.wav"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Convert { level, input, output } => {
                assert_eq!(level, Level::CHU_MOY);
                assert_eq!(input, PathBuf::from("a.wav"));
                assert_eq!(output, PathBuf::from("b.wav"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_float_stream_format() {
        let format = stream_format(false, Endian::Little, IntWidth::W16, Some(FloatKind::Double));
        assert_eq!(format, SampleFormat::float64(ByteOrder::Little));
    }
}
