//! Mock hardware adapter for integration tests.
//!
//! Presents the controller with a scripted input bus and records the
//! driven outputs.  The serial line goes through a real [`TxPin`] over a
//! recording pin, so tests can assert on every edge written to the wire.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use growbox::app::events::AppEvent;
use growbox::app::ports::{ActuatorPort, EventSink, SensorPort};
use growbox::bus::{
    ControllerInputs, OUT_COOL, OUT_DEHUMIDIFY, OUT_FAULT, OUT_HEARTBEAT, OUT_HEAT, OUT_LIGHT,
    OUT_SERIAL_TX, OUT_WATER,
};
use growbox::control::ActuatorDemand;
use growbox::drivers::tx_pin::TxPin;

// ── Serial line pin ───────────────────────────────────────────

/// Output pin that remembers every level written.
#[derive(Default)]
pub struct LinePin {
    pub writes: Vec<bool>,
}

impl ErrorType for LinePin {
    type Error = Infallible;
}

impl OutputPin for LinePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.push(false);
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.push(true);
        Ok(())
    }
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Bytes presented on the next `sample()`.
    pub ui_in: u8,
    pub uio_in: u8,
    pub enable: bool,

    pub actuators: ActuatorDemand,
    pub fault: bool,
    pub heartbeat: bool,
    pub serial: TxPin<LinePin>,
    pub samples: u64,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(ui_in: u8, uio_in: u8) -> Self {
        Self {
            ui_in,
            uio_in,
            enable: true,
            actuators: ActuatorDemand::idle(),
            fault: false,
            heartbeat: false,
            serial: TxPin::new(LinePin::default()),
            samples: 0,
        }
    }

    /// Current output bus byte as the driven pins show it.
    pub fn uo_out(&self) -> u8 {
        let a = &self.actuators;
        let mut out = 0;
        for (on, bit) in [
            (a.water, OUT_WATER),
            (a.heat, OUT_HEAT),
            (a.cool, OUT_COOL),
            (a.light, OUT_LIGHT),
            (self.fault, OUT_FAULT),
            (self.heartbeat, OUT_HEARTBEAT),
            (a.dehumidify, OUT_DEHUMIDIFY),
            (self.serial.level().unwrap_or(true), OUT_SERIAL_TX),
        ] {
            if on {
                out |= bit;
            }
        }
        out
    }

    /// Every level written to the serial pin, in order.
    pub fn serial_writes(self) -> Vec<bool> {
        self.serial.release().writes
    }
}

impl SensorPort for MockHardware {
    fn sample(&mut self) -> ControllerInputs {
        self.samples += 1;
        ControllerInputs::from_bus(self.ui_in, self.uio_in, self.enable)
    }
}

impl ActuatorPort for MockHardware {
    fn set_actuators(&mut self, actuators: &ActuatorDemand) {
        self.actuators = *actuators;
    }

    fn set_fault(&mut self, on: bool) {
        self.fault = on;
    }

    fn set_heartbeat(&mut self, on: bool) {
        self.heartbeat = on;
    }

    fn set_serial_line(&mut self, high: bool) {
        self.serial.drive(high).unwrap_or_else(|never| match never {});
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
