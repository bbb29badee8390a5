//! Front ends for the crossfeed filter.
//!
//! - [`commands::convert`] crossfeeds a stereo WAV file into a new WAV file
//! - [`commands::stream`] crossfeeds raw interleaved PCM between two byte streams

pub mod cli_args;
pub mod commands;

use crossfeed_dsp::Level;

/// Frames per processing block.
pub const BLOCK_FRAMES: usize = 512;

/// Human-readable description of a crossfeed level.
pub fn describe_level(level: Level) -> String {
    let level = level.normalized();
    match (level.feed_db(), level.cutoff_hz(), level.delay_us()) {
        (Some(feed), Some(fcut), Some(delay)) => {
            format!("{:.1} dB, {} Hz, {} us", feed, fcut, delay)
        }
        _ => {
            let p = level.params();
            format!(
                "{} preset ({:.0}/{:.0} Hz, gains {:.3}/{:.3})",
                level.name(),
                p.fc_lo,
                p.fc_hi,
                p.g_lo,
                p.g_hi
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_custom_level() {
        assert_eq!(describe_level(Level::BS2B_DEFAULT), "4.5 dB, 700 Hz, 260 us");
        assert_eq!(describe_level(Level::JAN_MEIER), "9.5 dB, 650 Hz, 280 us");
    }

    #[test]
    fn test_describe_preset() {
        assert_eq!(
            describe_level(Level::High),
            "high preset (700/1021 Hz, gains 0.531/0.250)"
        );
    }
}
