//! Crossfeed level: six tuned presets plus a continuous feed/cutoff form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lowest accepted feed, in tenths of dB (1.0 dB).
pub const MIN_FEED: u16 = 10;
/// Highest accepted feed, in tenths of dB (15.0 dB).
pub const MAX_FEED: u16 = 150;
/// Lowest accepted cut frequency (Hz).
pub const MIN_FCUT: u16 = 300;
/// Highest accepted cut frequency (Hz).
pub const MAX_FCUT: u16 = 2000;

/// Crossfeed level.
///
/// The presets carry raw codes 1..=6. `Custom` packs as `feed << 16 | fcut`,
/// which can never collide with a preset code since `feed >= MIN_FEED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Level {
    Low,
    Middle,
    High,
    LowEasy,
    MiddleEasy,
    #[default]
    HighEasy,
    /// Continuous form: `feed` in tenths of dB, `fcut` in Hz.
    Custom { feed: u16, fcut: u16 },
}

/// Corner frequencies and leg gains a level resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    /// Low-pass corner (Hz)
    pub fc_lo: f64,
    /// High-boost corner (Hz)
    pub fc_hi: f64,
    /// Low-pass leg gain, in (0, 1)
    pub g_lo: f64,
    /// High-boost leg gain, in (0, 1)
    pub g_hi: f64,
}

impl Level {
    /// The classic bs2b level (`d` on the command line): 700 Hz / 260 µs, 4.5 dB.
    ///
    /// Not the same as [`Level::default()`], which is the high-easy preset.
    pub const BS2B_DEFAULT: Level = Level::Custom { feed: 45, fcut: 700 };
    /// Chu Moy's preset: 700 Hz / 260 µs, 6.0 dB.
    pub const CHU_MOY: Level = Level::Custom { feed: 60, fcut: 700 };
    /// Jan Meier's preset: 650 Hz / 280 µs, 9.5 dB.
    pub const JAN_MEIER: Level = Level::Custom { feed: 95, fcut: 650 };

    /// The six tuned presets, in raw-code order.
    pub fn presets() -> &'static [Level] {
        &[
            Level::Low,
            Level::Middle,
            Level::High,
            Level::LowEasy,
            Level::MiddleEasy,
            Level::HighEasy,
        ]
    }

    /// Strict constructor for the continuous form.
    pub fn custom(feed: u16, fcut: u16) -> Result<Self> {
        if !(MIN_FEED..=MAX_FEED).contains(&feed) {
            return Err(Error::InvalidLevel(format!(
                "feed {} out of range ({}..{} tenths of dB)",
                feed, MIN_FEED, MAX_FEED
            )));
        }
        if !(MIN_FCUT..=MAX_FCUT).contains(&fcut) {
            return Err(Error::InvalidLevel(format!(
                "cut frequency {} out of range ({}..{} Hz)",
                fcut, MIN_FCUT, MAX_FCUT
            )));
        }
        Ok(Level::Custom { feed, fcut })
    }

    /// Decode a raw level code. Anything unrecognized becomes `HighEasy`.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Level::Low,
            2 => Level::Middle,
            3 => Level::High,
            4 => Level::LowEasy,
            5 => Level::MiddleEasy,
            6 => Level::HighEasy,
            _ => {
                let feed = (raw >> 16) as u16;
                let fcut = (raw & 0xffff) as u16;
                Level::custom(feed, fcut).unwrap_or_default()
            }
        }
    }

    /// Raw level code.
    pub fn to_raw(self) -> u32 {
        match self {
            Level::Low => 1,
            Level::Middle => 2,
            Level::High => 3,
            Level::LowEasy => 4,
            Level::MiddleEasy => 5,
            Level::HighEasy => 6,
            Level::Custom { feed, fcut } => ((feed as u32) << 16) | fcut as u32,
        }
    }

    /// False only for a `Custom` level with feed or cutoff out of range.
    pub fn is_valid(self) -> bool {
        match self {
            Level::Custom { feed, fcut } => {
                (MIN_FEED..=MAX_FEED).contains(&feed) && (MIN_FCUT..=MAX_FCUT).contains(&fcut)
            }
            _ => true,
        }
    }

    /// The level the engine actually runs: invalid custom levels fall back to `HighEasy`.
    pub fn normalized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Level::HighEasy
        }
    }

    /// Resolve to corner frequencies and gains.
    pub fn params(self) -> LevelParams {
        match self.normalized() {
            Level::Low => LevelParams {
                fc_lo: 360.0,
                fc_hi: 501.0,
                g_lo: 0.398107170553497,
                g_hi: 0.205671765275719,
            },
            Level::Middle => LevelParams {
                fc_lo: 500.0,
                fc_hi: 711.0,
                g_lo: 0.459726988530872,
                g_hi: 0.228208484414988,
            },
            Level::High => LevelParams {
                fc_lo: 700.0,
                fc_hi: 1021.0,
                g_lo: 0.530884444230988,
                g_hi: 0.250105790667544,
            },
            Level::LowEasy => LevelParams {
                fc_lo: 360.0,
                fc_hi: 494.0,
                g_lo: 0.316227766016838,
                g_hi: 0.168236228897329,
            },
            Level::MiddleEasy => LevelParams {
                fc_lo: 500.0,
                fc_hi: 689.0,
                g_lo: 0.354813389233575,
                g_hi: 0.187169483835901,
            },
            Level::HighEasy => LevelParams {
                fc_lo: 700.0,
                fc_hi: 975.0,
                g_lo: 0.398107170553497,
                g_hi: 0.205671765275719,
            },
            Level::Custom { feed, fcut } => continuous_params(feed, fcut),
        }
    }

    /// Feed level in dB (continuous form only).
    pub fn feed_db(self) -> Option<f64> {
        match self.normalized() {
            Level::Custom { feed, .. } => Some(feed as f64 / 10.0),
            _ => None,
        }
    }

    /// Cut frequency in Hz (continuous form only).
    pub fn cutoff_hz(self) -> Option<u16> {
        match self.normalized() {
            Level::Custom { fcut, .. } => Some(fcut),
            _ => None,
        }
    }

    /// Approximate interaural delay in microseconds (continuous form only).
    pub fn delay_us(self) -> Option<u32> {
        self.cutoff_hz().map(|fcut| (18700 / fcut as u32) * 10)
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Middle => "middle",
            Level::High => "high",
            Level::LowEasy => "low-easy",
            Level::MiddleEasy => "middle-easy",
            Level::HighEasy => "high-easy",
            Level::Custom { .. } => "custom",
        }
    }
}

/// Feed/cutoff to gains and high-boost corner.
///
/// Splits the feed between the two legs (5/6 attenuates the low-pass leg,
/// 1/6 lifts the high-boost leg, both around -3 dB) and moves the high-boost
/// corner up so the legs cross where their gains meet.
fn continuous_params(feed: u16, fcut: u16) -> LevelParams {
    let feed_db = feed as f64 / 10.0;
    let gb_lo = feed_db * -5.0 / 6.0 - 3.0;
    let gb_hi = feed_db / 6.0 - 3.0;

    let g_lo = 10f64.powf(gb_lo / 20.0);
    let g_hi = 1.0 - 10f64.powf(gb_hi / 20.0);
    let fc_lo = fcut as f64;
    let fc_hi = fc_lo * 2f64.powf((gb_lo - 20.0 * g_hi.log10()) / 12.0);

    LevelParams {
        fc_lo,
        fc_hi,
        g_lo,
        g_hi,
    }
}

impl From<u32> for Level {
    fn from(raw: u32) -> Self {
        Level::from_raw(raw)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.to_raw()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Custom { feed, fcut } => write!(f, "{}:{}", feed, fcut),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Accepts preset names, `d`/`c`/`m` for the named custom presets,
    /// `FEED:FCUT`, or a raw level code.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        let level = match s.as_str() {
            "low" => Level::Low,
            "middle" => Level::Middle,
            "high" => Level::High,
            "low-easy" => Level::LowEasy,
            "middle-easy" => Level::MiddleEasy,
            "high-easy" => Level::HighEasy,
            "d" | "default" => Level::BS2B_DEFAULT,
            "c" | "cmoy" | "chu-moy" => Level::CHU_MOY,
            "m" | "jmeier" | "jan-meier" => Level::JAN_MEIER,
            _ => return parse_numeric(&s),
        };
        Ok(level)
    }
}

fn parse_numeric(s: &str) -> Result<Level> {
    let invalid = || Error::InvalidLevel(s.to_string());

    if let Some((feed, fcut)) = s.split_once(':') {
        let feed = feed.trim().parse::<u16>().map_err(|_| invalid())?;
        let fcut = fcut.trim().parse::<u16>().map_err(|_| invalid())?;
        return Level::custom(feed, fcut);
    }

    let raw = s.parse::<u32>().map_err(|_| invalid())?;
    let level = Level::from_raw(raw);
    if level.to_raw() != raw {
        return Err(invalid());
    }
    Ok(level)
}
