//! Per-tick input and output signals, and their 8-bit bus packing.
//!
//! ```text
//!  ui_in   [7:6] soil   [5:4] light   [3:2] humidity   [1:0] temperature
//!  uio_in  [2:1] crop selector        [0] override
//!  uo_out  7 serial TX   6 dehumidify   5 heartbeat   4 fault
//!          3 light       2 cool         1 heat        0 water
//! ```

use serde::{Deserialize, Serialize};

use crate::control::ActuatorDemand;
use crate::profile::CropProfile;
use crate::sensors::{Level, SensorLevels};

pub const OUT_WATER: u8 = 1 << 0;
pub const OUT_HEAT: u8 = 1 << 1;
pub const OUT_COOL: u8 = 1 << 2;
pub const OUT_LIGHT: u8 = 1 << 3;
pub const OUT_FAULT: u8 = 1 << 4;
pub const OUT_HEARTBEAT: u8 = 1 << 5;
pub const OUT_DEHUMIDIFY: u8 = 1 << 6;
pub const OUT_SERIAL_TX: u8 = 1 << 7;

/// Mask of the five actuator bits.
pub const OUT_ACTUATORS: u8 = OUT_WATER | OUT_HEAT | OUT_COOL | OUT_LIGHT | OUT_DEHUMIDIFY;

/// Everything the core samples on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerInputs {
    pub raw: SensorLevels,
    pub profile: CropProfile,
    pub override_cmd: bool,
    /// When low the tick is a full pause: nothing advances.
    pub enable: bool,
}

impl Default for ControllerInputs {
    fn default() -> Self {
        Self {
            raw: SensorLevels::optimal(),
            profile: CropProfile::Radish,
            override_cmd: false,
            enable: true,
        }
    }
}

impl ControllerInputs {
    /// Unpack the sensor and control buses.
    pub const fn from_bus(ui_in: u8, uio_in: u8, enable: bool) -> Self {
        Self {
            raw: SensorLevels {
                temperature: Level::from_bits(ui_in),
                humidity: Level::from_bits(ui_in >> 2),
                light: Level::from_bits(ui_in >> 4),
                soil_moisture: Level::from_bits(ui_in >> 6),
            },
            profile: CropProfile::from_bits(uio_in >> 1),
            override_cmd: uio_in & 1 == 1,
            enable,
        }
    }

    /// Sensor bus byte.
    pub const fn ui_in(&self) -> u8 {
        self.raw.temperature.bits()
            | (self.raw.humidity.bits() << 2)
            | (self.raw.light.bits() << 4)
            | (self.raw.soil_moisture.bits() << 6)
    }

    /// Control bus byte.
    pub const fn uio_in(&self) -> u8 {
        (self.profile.bits() << 1) | self.override_cmd as u8
    }
}

/// Everything the core drives after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOutputs {
    pub actuators: ActuatorDemand,
    pub fault: bool,
    pub heartbeat: bool,
    /// Serial line level, idle high.
    pub serial_tx: bool,
}

impl Default for ControllerOutputs {
    fn default() -> Self {
        Self {
            actuators: ActuatorDemand::idle(),
            fault: false,
            heartbeat: false,
            serial_tx: true,
        }
    }
}

impl ControllerOutputs {
    /// Pack onto the output bus.
    pub fn to_bus(&self) -> u8 {
        let a = &self.actuators;
        [
            (a.water, OUT_WATER),
            (a.heat, OUT_HEAT),
            (a.cool, OUT_COOL),
            (a.light, OUT_LIGHT),
            (self.fault, OUT_FAULT),
            (self.heartbeat, OUT_HEARTBEAT),
            (a.dehumidify, OUT_DEHUMIDIFY),
            (self.serial_tx, OUT_SERIAL_TX),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(0, |bus, (_, bit)| bus | bit)
    }
}
