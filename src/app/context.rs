//! Register snapshot of the whole controller.
//!
//! `ControllerState` holds every piece of per-tick state.  A tick is
//! computed as `next = state.next(inputs)` from a frozen `&self`, and the
//! caller commits it by assignment.  No component ever sees another's
//! half-updated value within a tick, and the evaluation order below has no
//! effect on the result.
//!
//! ```text
//!              ┌────────────┐ filtered ┌──────────────┐ demand ┌──────────┐
//!  raw ──────▶ │ SensorFilter│────┬───▶│DecisionEngine│───┬───▶│ Override │──▶ actuators
//!              └────────────┘    │    └──────────────┘   │    └──────────┘
//!                                ▼                       ▼
//!                          ┌──────────┐            ┌────────────┐ fault ┌──────────┐
//!                          │ History  │            │FaultMonitor│──────▶│ Reporter │──▶ serial
//!                          └──────────┘            └────────────┘       └──────────┘
//!  Heartbeat (independent) ─────────────────────────────────────────────────────────▶ heartbeat
//! ```

use crate::bus::{ControllerInputs, ControllerOutputs};
use crate::config::ControllerConfig;
use crate::control::{self, ActuatorDemand, OverrideArbiter};
use crate::drivers::heartbeat::Heartbeat;
use crate::history::HistoryBank;
use crate::profile::{CropProfile, Thresholds};
use crate::reporting::FaultReporter;
use crate::safety::FaultMonitor;
use crate::sensors::{SensorFilter, SensorLevels};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub filter: SensorFilter,
    pub history: HistoryBank,
    pub arbiter: OverrideArbiter,
    pub monitor: FaultMonitor,
    pub reporter: FaultReporter,
    pub heartbeat: Heartbeat,
    /// Crop selector sampled on the last committed tick.
    pub profile: CropProfile,
    /// Enabled ticks since reset.
    pub ticks: u64,
}

impl ControllerState {
    /// Power-on / reset state.
    pub const fn new() -> Self {
        Self {
            filter: SensorFilter::new(),
            history: HistoryBank::new(),
            arbiter: OverrideArbiter::new(),
            monitor: FaultMonitor::new(),
            reporter: FaultReporter::new(),
            heartbeat: Heartbeat::new(),
            profile: CropProfile::Radish,
            ticks: 0,
        }
    }

    /// Demand implied by the committed filter state under `profile`.
    pub fn demand(&self, profile: CropProfile) -> ActuatorDemand {
        control::evaluate(&self.filter.filtered(), &profile.thresholds())
    }

    /// Compute the next state from this frozen snapshot, using the
    /// thresholds of the sampled crop profile.
    #[must_use]
    pub fn next(&self, inputs: &ControllerInputs, config: &ControllerConfig) -> Self {
        self.next_with(inputs, &inputs.profile.thresholds(), config)
    }

    /// As [`next`](Self::next), but decide against explicit `thresholds`.
    #[must_use]
    pub fn next_with(
        &self,
        inputs: &ControllerInputs,
        thresholds: &Thresholds,
        config: &ControllerConfig,
    ) -> Self {
        let filtered: SensorLevels = self.filter.filtered();
        let demand = control::evaluate(&filtered, thresholds);

        Self {
            filter: self.filter.next(&inputs.raw, config.filter_threshold),
            history: self.history.next(&filtered, config.log_interval),
            arbiter: self.arbiter.next(inputs.override_cmd, demand),
            monitor: self.monitor.next(&demand),
            reporter: self
                .reporter
                .next(self.monitor.is_faulted(), config.clks_per_bit),
            heartbeat: self.heartbeat.next(config.heartbeat_half_period()),
            profile: inputs.profile,
            ticks: self.ticks.wrapping_add(1),
        }
    }

    /// Output signals driven by the committed registers.
    pub fn outputs(&self) -> ControllerOutputs {
        ControllerOutputs {
            actuators: self.arbiter.actuators(),
            fault: self.monitor.is_faulted(),
            heartbeat: self.heartbeat.level(),
            serial_tx: self.reporter.line(),
        }
    }
}
