//! Serial fault reporter.
//!
//! Announces each fault episode with a single ASCII `'F'` on the serial
//! line.  The `reported` latch guarantees at most one send per contiguous
//! episode; it is released as soon as the fault clears.  Nothing is queued:
//! a send is only issued while the transmitter is idle, so an episode that
//! starts and ends inside another frame is never reported.

use log::debug;

use crate::drivers::uart_tx::UartTx;

/// Diagnostic byte emitted per fault episode.
pub const FAULT_REPORT_BYTE: u8 = b'F';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultReporter {
    reported: bool,
    tx: UartTx,
    /// Frames started since reset (saturating).
    frames: u32,
}

impl FaultReporter {
    pub const fn new() -> Self {
        Self {
            reported: false,
            tx: UartTx::new(),
            frames: 0,
        }
    }

    /// Advance one tick against the previously committed fault flag.
    #[must_use]
    pub fn next(&self, fault: bool, clks_per_bit: u32) -> Self {
        let send = fault && !self.reported && !self.tx.is_busy();

        let reported = if !fault { false } else { self.reported || send };

        let mut frames = self.frames;
        if send {
            frames = frames.saturating_add(1);
            debug!("Fault report queued on serial line (frame {frames})");
        }

        Self {
            reported,
            tx: self.tx.next(send.then_some(FAULT_REPORT_BYTE), clks_per_bit),
            frames,
        }
    }

    /// Serial line level.
    pub fn line(&self) -> bool {
        self.tx.line()
    }

    pub fn is_busy(&self) -> bool {
        self.tx.is_busy()
    }

    pub fn is_reported(&self) -> bool {
        self.reported
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn transmitter(&self) -> &UartTx {
        &self.tx
    }
}
