//! Control layer: threshold decisioning and override arbitration.

pub mod decision;
pub mod override_arbiter;

pub use decision::{ActuatorDemand, evaluate};
pub use override_arbiter::OverrideArbiter;
