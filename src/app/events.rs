//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port whenever a committed tick
//! changes something worth reporting.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::control::ActuatorDemand;
use crate::history::{HISTORY_DEPTH, Trend};
use crate::profile::CropProfile;
use crate::sensors::{Channel, Level, SensorLevels};

/// Structured events emitted by the controller core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The controller has started (carries the initial profile).
    Started(CropProfile),

    /// Global state reset applied.
    Reset,

    /// The crop selector changed.
    ProfileChanged { from: CropProfile, to: CropProfile },

    /// Override latch went high; actuators are forced off.
    OverrideEngaged,

    /// Override latch went low; actuators follow demand again.
    OverrideReleased,

    /// A contradiction fault episode started.
    FaultRaised { episode: u32 },

    /// The contradiction resolved.
    FaultCleared,

    /// A diagnostic byte started going out on the serial line.
    FaultReported { byte: u8 },

    /// Snapshot taken after each history write.
    Telemetry(TelemetryData),
}

/// Per-channel history digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHistory {
    pub channel: Channel,
    /// Logged levels, oldest first.
    pub recent: Vec<Level, HISTORY_DEPTH>,
    pub min: Level,
    pub max: Level,
    pub trend: Trend,
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryData {
    pub ticks: u64,
    pub profile: CropProfile,
    pub filtered: SensorLevels,
    pub actuators: ActuatorDemand,
    pub override_active: bool,
    pub fault: bool,
    pub fault_episodes: u32,
    pub reports_sent: u32,
    pub history: [ChannelHistory; Channel::COUNT],
}
