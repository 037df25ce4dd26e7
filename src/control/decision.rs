//! Threshold decision engine
//!
//! Pure combinational mapping from filtered levels and the active crop
//! thresholds to five actuator demands.  Evaluated every tick; never fails.

use serde::{Deserialize, Serialize};

use crate::profile::Thresholds;
use crate::sensors::{Level, SensorLevels};

/// Five independent on/off actuator requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorDemand {
    pub water: bool,
    pub heat: bool,
    pub cool: bool,
    pub light: bool,
    pub dehumidify: bool,
}

impl ActuatorDemand {
    /// All actuators off.
    pub const fn idle() -> Self {
        Self {
            water: false,
            heat: false,
            cool: false,
            light: false,
            dehumidify: false,
        }
    }

    pub fn any(&self) -> bool {
        self.water || self.heat || self.cool || self.light || self.dehumidify
    }

    /// Heating and cooling requested at once.
    pub fn is_contradictory(&self) -> bool {
        self.heat && self.cool
    }
}

/// Evaluate the demand rules for one tick.
pub fn evaluate(levels: &SensorLevels, t: &Thresholds) -> ActuatorDemand {
    let temp = levels.temperature;
    let light = levels.light;

    ActuatorDemand {
        heat: temp <= t.temp_low || (t.extra_heat && temp == Level::L1),
        cool: temp >= t.temp_high || (t.cool_early && temp == Level::L2),
        dehumidify: levels.humidity >= t.humid_high,
        light: light <= t.light_low || (t.light_boost && light == Level::L1),
        water: levels.soil_moisture <= t.soil_low,
    }
}
