//! Controller configuration parameters
//!
//! Timing tunables for the tick-driven pipeline.  Every duration is counted
//! in controller ticks; `tick_rate_hz` only converts them to wall-clock
//! units for logging and telemetry.  Crop thresholds are not configurable
//! here: they are compiled into [`crate::profile`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Sensor conditioning ---
    /// Consecutive stable ticks before a raw level is accepted
    pub filter_threshold: u32,

    // --- History ---
    /// Ticks between history log writes
    pub log_interval: u32,

    // --- Serial reporter ---
    /// Ticks each serial bit is held on the line
    pub clks_per_bit: u32,

    // --- Heartbeat ---
    /// Full heartbeat period in ticks (the output toggles every half period)
    pub heartbeat_period: u32,

    // --- Reference clock ---
    /// Tick rate of the driving clock, used only for unit conversion
    pub tick_rate_hz: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            filter_threshold: 100_000,    // 4 ms @ 25 MHz
            log_interval: 2_500_000,      // 100 ms @ 25 MHz
            clks_per_bit: 217,            // ~115200 baud @ 25 MHz
            heartbeat_period: 25_000_000, // 1 Hz @ 25 MHz
            tick_rate_hz: 25_000_000,
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let config: Self =
            serde_json::from_slice(bytes).map_err(|_| Error::Config("malformed config document"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall a counter or divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.clks_per_bit == 0 {
            return Err(Error::Config("clks_per_bit must be non-zero"));
        }
        if self.log_interval == 0 {
            return Err(Error::Config("log_interval must be non-zero"));
        }
        if self.heartbeat_period < 2 {
            return Err(Error::Config("heartbeat_period must be at least 2"));
        }
        if self.tick_rate_hz == 0 {
            return Err(Error::Config("tick_rate_hz must be non-zero"));
        }
        Ok(())
    }

    /// Serial bit rate implied by `clks_per_bit` at the reference tick rate.
    pub fn baud_rate(&self) -> u32 {
        self.tick_rate_hz / self.clks_per_bit.max(1)
    }

    /// Heartbeat square-wave frequency in Hz.
    pub fn heartbeat_hz(&self) -> f32 {
        self.tick_rate_hz as f32 / self.heartbeat_period.max(1) as f32
    }

    /// Debounce window in milliseconds.
    pub fn filter_window_ms(&self) -> f32 {
        self.filter_threshold as f32 * 1000.0 / self.tick_rate_hz.max(1) as f32
    }

    /// Ticks between heartbeat toggles.
    pub(crate) fn heartbeat_half_period(&self) -> u32 {
        (self.heartbeat_period / 2).max(1)
    }
}
