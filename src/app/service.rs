//! Controller service, the hexagonal core.
//!
//! [`Controller`] owns the register snapshot and configuration.  It exposes
//! a clean, hardware-agnostic API.  All I/O flows through port traits
//! injected at call sites, making the entire pipeline testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │         Controller          │
//! ActuatorPort ◀──│ Filter · Decide · Override  │
//!                 │ History · Fault · Serial    │
//!                 └────────────────────────────┘
//! ```

use log::info;

use crate::bus::{ControllerInputs, ControllerOutputs};
use crate::config::ControllerConfig;
use crate::history::HistoryLog;
use crate::error::Result;
use crate::profile::{CropProfile, Thresholds};
use crate::reporting::FAULT_REPORT_BYTE;
use crate::sensors::{Channel, Level};

use super::context::ControllerState;
use super::events::{AppEvent, ChannelHistory, TelemetryData};
use super::ports::{ActuatorPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The controller orchestrates every component on each tick.
pub struct Controller {
    config: ControllerConfig,
    state: ControllerState,
}

impl Controller {
    /// Construct the controller in its reset state.
    ///
    /// `config` is taken as is; use [`try_new`](Self::try_new) for values
    /// that have not been through [`ControllerConfig::validate`].
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::new(),
        }
    }

    /// Validate `config`, then construct the controller.
    pub fn try_new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the controller and drive the reset outputs once.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        info!(
            "Controller started: filter={} ticks ({:.1} ms), log every {} ticks, {} baud",
            self.config.filter_threshold,
            self.config.filter_window_ms(),
            self.config.log_interval,
            self.config.baud_rate(),
        );
        Self::apply_outputs(&self.state.outputs(), hw);
        sink.emit(&AppEvent::Started(self.state.profile));
    }

    /// Global state reset: every component back to its power-on value and
    /// the reset outputs driven at once.  An in-flight serial frame is
    /// abandoned.
    pub fn reset(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        info!("Controller reset after {} ticks", self.state.ticks);
        self.state = ControllerState::new();
        Self::apply_outputs(&self.state.outputs(), hw);
        sink.emit(&AppEvent::Reset);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Advance one tick from `inputs` and return the committed outputs.
    ///
    /// With `enable` low nothing changes and the held outputs are returned.
    pub fn step(&mut self, inputs: &ControllerInputs) -> ControllerOutputs {
        if inputs.enable {
            self.state = self.state.next(inputs, &self.config);
        }
        self.state.outputs()
    }

    /// Run one full cycle: sample → step → drive outputs → emit events.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + ActuatorPort), sink: &mut impl EventSink) {
        let inputs = hw.sample();
        self.tick_against(&inputs, &inputs.profile.thresholds(), hw, sink);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Outputs driven by the committed state.
    pub fn outputs(&self) -> ControllerOutputs {
        self.state.outputs()
    }

    pub fn filtered(&self, channel: Channel) -> Level {
        self.state.filter.channel(channel).filtered()
    }

    pub fn history(&self, channel: Channel) -> &HistoryLog {
        self.state.history.log(channel)
    }

    /// Crop selector sampled on the last enabled tick.
    pub fn profile(&self) -> CropProfile {
        self.state.profile
    }

    /// Enabled ticks since the last reset.
    pub fn tick_count(&self) -> u64 {
        self.state.ticks
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Build a telemetry snapshot from the committed state.
    pub fn build_telemetry(&self) -> TelemetryData {
        let s = &self.state;
        TelemetryData {
            ticks: s.ticks,
            profile: s.profile,
            filtered: s.filter.filtered(),
            actuators: s.arbiter.actuators(),
            override_active: s.arbiter.is_latched(),
            fault: s.monitor.is_faulted(),
            fault_episodes: s.monitor.episodes(),
            reports_sent: s.reporter.frames(),
            history: Channel::ALL.map(|channel| {
                let log = s.history.log(channel);
                ChannelHistory {
                    channel,
                    recent: log.chronological(),
                    min: log.min(),
                    max: log.max(),
                    trend: log.trend(),
                }
            }),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn tick_against(
        &mut self,
        inputs: &ControllerInputs,
        thresholds: &Thresholds,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let prev = self.state;
        if inputs.enable {
            self.state = prev.next_with(inputs, thresholds, &self.config);
        }
        Self::apply_outputs(&self.state.outputs(), hw);

        if inputs.enable {
            self.emit_changes(&prev, sink);
        }
    }

    fn apply_outputs(outputs: &ControllerOutputs, hw: &mut impl ActuatorPort) {
        hw.set_actuators(&outputs.actuators);
        hw.set_fault(outputs.fault);
        hw.set_heartbeat(outputs.heartbeat);
        hw.set_serial_line(outputs.serial_tx);
    }

    /// Diff the committed state against `prev` and report what changed.
    fn emit_changes(&self, prev: &ControllerState, sink: &mut impl EventSink) {
        let now = &self.state;

        if now.profile != prev.profile {
            info!(
                "Crop profile: {} -> {}",
                prev.profile.name(),
                now.profile.name()
            );
            sink.emit(&AppEvent::ProfileChanged {
                from: prev.profile,
                to: now.profile,
            });
        }

        match (prev.arbiter.is_latched(), now.arbiter.is_latched()) {
            (false, true) => {
                info!("Manual override engaged");
                sink.emit(&AppEvent::OverrideEngaged);
            }
            (true, false) => {
                info!("Manual override released");
                sink.emit(&AppEvent::OverrideReleased);
            }
            _ => {}
        }

        match (prev.monitor.is_faulted(), now.monitor.is_faulted()) {
            (false, true) => sink.emit(&AppEvent::FaultRaised {
                episode: now.monitor.episodes(),
            }),
            (true, false) => sink.emit(&AppEvent::FaultCleared),
            _ => {}
        }

        if now.reporter.frames() != prev.reporter.frames() {
            sink.emit(&AppEvent::FaultReported {
                byte: FAULT_REPORT_BYTE,
            });
        }

        if now.history.writes() != prev.history.writes() {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }
}
