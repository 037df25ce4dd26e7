//! Crop profile table.
//!
//! A closed set of four crops, each resolving to an immutable threshold
//! tuple.  The 2-bit selector maps 1:1 onto the table, so there is no
//! "unselected" state and no lookup can fail.
//!
//! | Profile   | temp_low | temp_high | humid_high | light_low | soil_low | modifiers                  |
//! |-----------|----------|-----------|------------|-----------|----------|----------------------------|
//! | Radish    | 0        | 3         | 3          | 0         | 1        | early_water                |
//! | Basil     | 0        | 3         | 3          | 0         | 0        | extra_heat, light_boost    |
//! | PeaShoots | 0        | 2         | 3          | 0         | 0        | cool_early                 |
//! | Sunflower | 0        | 3         | 2          | 0         | 1        | early_water, humid_lower_tolerance |

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sensors::Level;

/// Threshold/modifier tuple consumed by the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub temp_low: Level,
    pub temp_high: Level,
    pub humid_high: Level,
    pub light_low: Level,
    pub soil_low: Level,
    /// Heat one band earlier (at `L1`).
    pub extra_heat: bool,
    /// Light one band earlier (at `L1`).
    pub light_boost: bool,
    /// Carried for diagnostics only; the watering rule is driven by `soil_low`.
    pub early_water: bool,
    /// Carried for diagnostics only; already folded into `humid_high`.
    pub humid_lower_tolerance: bool,
    /// Cool already at the optimal band (`L2`).
    pub cool_early: bool,
}

/// Selectable crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CropProfile {
    #[default]
    Radish = 0,
    Basil = 1,
    PeaShoots = 2,
    Sunflower = 3,
}

const TABLE: [Thresholds; 4] = [
    // Radish
    Thresholds {
        temp_low: Level::L0,
        temp_high: Level::L3,
        humid_high: Level::L3,
        light_low: Level::L0,
        soil_low: Level::L1,
        extra_heat: false,
        light_boost: false,
        early_water: true,
        humid_lower_tolerance: false,
        cool_early: false,
    },
    // Basil
    Thresholds {
        temp_low: Level::L0,
        temp_high: Level::L3,
        humid_high: Level::L3,
        light_low: Level::L0,
        soil_low: Level::L0,
        extra_heat: true,
        light_boost: true,
        early_water: false,
        humid_lower_tolerance: false,
        cool_early: false,
    },
    // PeaShoots
    Thresholds {
        temp_low: Level::L0,
        temp_high: Level::L2,
        humid_high: Level::L3,
        light_low: Level::L0,
        soil_low: Level::L0,
        extra_heat: false,
        light_boost: false,
        early_water: false,
        humid_lower_tolerance: false,
        cool_early: true,
    },
    // Sunflower
    Thresholds {
        temp_low: Level::L0,
        temp_high: Level::L3,
        humid_high: Level::L2,
        light_low: Level::L0,
        soil_low: Level::L1,
        extra_heat: false,
        light_boost: false,
        early_water: true,
        humid_lower_tolerance: true,
        cool_early: false,
    },
];

impl CropProfile {
    pub const ALL: [Self; 4] = [Self::Radish, Self::Basil, Self::PeaShoots, Self::Sunflower];

    /// Decode the low two bits of `raw`.
    pub const fn from_bits(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::Radish,
            1 => Self::Basil,
            2 => Self::PeaShoots,
            _ => Self::Sunflower,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Resolve this profile to its compiled-in thresholds.
    pub const fn thresholds(self) -> Thresholds {
        TABLE[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Radish => "radish",
            Self::Basil => "basil",
            Self::PeaShoots => "pea shoots",
            Self::Sunflower => "sunflower",
        }
    }
}

impl TryFrom<u8> for CropProfile {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self> {
        if raw > 3 {
            return Err(Error::InvalidSelector(raw));
        }
        Ok(Self::from_bits(raw))
    }
}

/// Table lookup straight from a 2-bit selector.
pub const fn thresholds(selector: u8) -> Thresholds {
    CropProfile::from_bits(selector).thresholds()
}
