//! Port traits: the boundary between the controller core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (bus sampler, output drivers, event sinks) implement
//! these traits.  The [`Controller`](super::service::Controller) consumes
//! them via generics, so the core never touches hardware directly.

use crate::bus::ControllerInputs;
use crate::control::ActuatorDemand;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: sampled once at the start of every tick.
pub trait SensorPort {
    /// Sample the four sensor levels, crop selector, override line and
    /// enable flag.
    fn sample(&mut self) -> ControllerInputs;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: driven once at the end of every tick with the
/// committed outputs.
pub trait ActuatorPort {
    /// Drive the five actuator relays.
    fn set_actuators(&mut self, actuators: &ActuatorDemand);

    /// Drive the fault indicator.
    fn set_fault(&mut self, on: bool);

    /// Drive the heartbeat indicator.
    fn set_heartbeat(&mut self, on: bool);

    /// Drive the serial TX line (`true` = high / idle).
    fn set_serial_line(&mut self, high: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
