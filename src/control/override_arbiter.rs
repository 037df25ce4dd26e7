//! Manual override arbitration.
//!
//! The override line is latched one tick before it gates the actuators.
//! While the latch is set every output is forced off; otherwise the
//! outputs follow the decision engine.

use super::decision::ActuatorDemand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideArbiter {
    latched: bool,
    actuators: ActuatorDemand,
}

impl OverrideArbiter {
    pub const fn new() -> Self {
        Self {
            latched: false,
            actuators: ActuatorDemand::idle(),
        }
    }

    /// Sample `command` into the latch and gate `demand` with the latch
    /// value from the previous tick.
    #[must_use]
    pub fn next(&self, command: bool, demand: ActuatorDemand) -> Self {
        Self {
            latched: command,
            actuators: if self.latched {
                ActuatorDemand::idle()
            } else {
                demand
            },
        }
    }

    /// Committed actuator outputs.
    pub fn actuators(&self) -> ActuatorDemand {
        self.actuators
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
