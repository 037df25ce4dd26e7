//! Application core: pure domain logic, zero I/O.
//!
//! This module wires the sensor filter, history log, decision engine,
//! override arbiter, fault monitor, serial reporter and heartbeat into one
//! synchronous tick.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod context;
pub mod events;
pub mod ports;
pub mod service;
