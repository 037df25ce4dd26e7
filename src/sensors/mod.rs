//! Sensor subsystem: quantised levels, channels, and the debounce bank.
//!
//! Every environmental channel arrives as a 2-bit ordinal.  [`SensorFilter`]
//! owns one [`DebounceFilter`] per channel and produces the filtered
//! [`SensorLevels`] that the decision engine and history log consume.

pub mod filter;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
pub use filter::DebounceFilter;

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Quantised sensor reading.  Ordering follows the numeric value; `L2` is
/// the optimal band for every channel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Level {
    L0 = 0,
    L1 = 1,
    #[default]
    L2 = 2,
    L3 = 3,
}

impl Level {
    /// The "optimal" band shared by all four channels.
    pub const OPTIMAL: Self = Self::L2;

    pub const ALL: [Self; 4] = [Self::L0, Self::L1, Self::L2, Self::L3];

    /// Decode the low two bits of `raw`; higher bits are ignored.
    pub const fn from_bits(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::L0,
            1 => Self::L1,
            2 => Self::L2,
            _ => Self::L3,
        }
    }

    /// Two-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_optimal(self) -> bool {
        self == Self::OPTIMAL
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        if raw > 3 {
            return Err(Error::InvalidLevel(raw));
        }
        Ok(Self::from_bits(raw))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.bits()
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// The four environmental inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channel {
    Temperature = 0,
    Humidity = 1,
    Light = 2,
    SoilMoisture = 3,
}

impl Channel {
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Temperature,
        Self::Humidity,
        Self::Light,
        Self::SoilMoisture,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Light => "light",
            Self::SoilMoisture => "soil",
        }
    }
}

// ---------------------------------------------------------------------------
// SensorLevels
// ---------------------------------------------------------------------------

/// One level per channel.  Used both for raw samples and filtered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorLevels {
    pub temperature: Level,
    pub humidity: Level,
    pub light: Level,
    pub soil_moisture: Level,
}

impl SensorLevels {
    /// Every channel at [`Level::OPTIMAL`].
    pub const fn optimal() -> Self {
        Self::uniform(Level::OPTIMAL)
    }

    pub const fn uniform(level: Level) -> Self {
        Self {
            temperature: level,
            humidity: level,
            light: level,
            soil_moisture: level,
        }
    }

    pub const fn get(&self, channel: Channel) -> Level {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Light => self.light,
            Channel::SoilMoisture => self.soil_moisture,
        }
    }

    /// Copy with one channel replaced.
    #[must_use]
    pub const fn with(mut self, channel: Channel, level: Level) -> Self {
        match channel {
            Channel::Temperature => self.temperature = level,
            Channel::Humidity => self.humidity = level,
            Channel::Light => self.light = level,
            Channel::SoilMoisture => self.soil_moisture = level,
        }
        self
    }
}

// ---------------------------------------------------------------------------
// SensorFilter
// ---------------------------------------------------------------------------

/// Debounce bank: one filter per channel, advanced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorFilter {
    channels: [DebounceFilter; Channel::COUNT],
}

impl Default for SensorFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorFilter {
    pub const fn new() -> Self {
        Self {
            channels: [DebounceFilter::new(); Channel::COUNT],
        }
    }

    /// Next state of every channel given this tick's raw sample.
    #[must_use]
    pub fn next(&self, raw: &SensorLevels, threshold: u32) -> Self {
        let mut channels = self.channels;
        for channel in Channel::ALL {
            channels[channel.index()] =
                self.channels[channel.index()].next(raw.get(channel), threshold);
        }
        Self { channels }
    }

    /// Filtered level for every channel.
    pub fn filtered(&self) -> SensorLevels {
        Channel::ALL
            .into_iter()
            .fold(SensorLevels::default(), |levels, channel| {
                levels.with(channel, self.channels[channel.index()].filtered())
            })
    }

    pub fn channel(&self, channel: Channel) -> &DebounceFilter {
        &self.channels[channel.index()]
    }
}
