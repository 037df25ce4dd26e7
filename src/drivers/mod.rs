//! Output drivers: serial transmitter, heartbeat divider, and pin adaptor.

pub mod heartbeat;
pub mod tx_pin;
pub mod uart_tx;
