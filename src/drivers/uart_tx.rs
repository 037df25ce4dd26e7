//! Bit-banged UART transmitter, 8N1, LSB first.
//!
//! ## Frame
//!
//! ```text
//!  line ───┐     ┌─────┬─────┬ … ┬─────┐     ┌──────── idle (high)
//!          │start│ b0  │ b1  │   │ b7  │stop │
//!          └─────┴─────┴─────┴ … ┴─────┘─────┘
//!           N     N     N           N     N      ticks each
//! ```
//!
//! `N` is `clks_per_bit`.  A request is only accepted in `Idle`; there is no
//! queue, a request offered while busy is simply not taken.
//!
//! | Phase | Line     | Leaves after     | Next  |
//! |-------|----------|------------------|-------|
//! | Idle  | high     | request accepted | Start |
//! | Start | low      | N ticks          | Data  |
//! | Data  | bit[i]   | 8 × N ticks      | Stop  |
//! | Stop  | high     | N ticks          | Idle  |

use serde::{Deserialize, Serialize};

/// Transmitter phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxPhase {
    #[default]
    Idle,
    Start,
    Data,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartTx {
    phase: TxPhase,
    byte: u8,
    bit_index: u8,
    clk_count: u32,
    line: bool,
}

impl Default for UartTx {
    fn default() -> Self {
        Self::new()
    }
}

impl UartTx {
    /// Idle with the line high.
    pub const fn new() -> Self {
        Self {
            phase: TxPhase::Idle,
            byte: 0,
            bit_index: 0,
            clk_count: 0,
            line: true,
        }
    }

    /// Advance one tick.  `request` is only honoured in `Idle`.
    #[must_use]
    pub fn next(&self, request: Option<u8>, clks_per_bit: u32) -> Self {
        let mut next = *self;
        let bit_done = self.clk_count + 1 >= clks_per_bit;
        if !bit_done {
            next.clk_count = self.clk_count + 1;
        } else {
            next.clk_count = 0;
        }

        match self.phase {
            TxPhase::Idle => {
                next.line = true;
                next.clk_count = 0;
                next.bit_index = 0;
                if let Some(byte) = request {
                    next.byte = byte;
                    next.phase = TxPhase::Start;
                }
            }
            TxPhase::Start => {
                next.line = false;
                if bit_done {
                    next.phase = TxPhase::Data;
                    next.bit_index = 0;
                }
            }
            TxPhase::Data => {
                next.line = (self.byte >> self.bit_index) & 1 == 1;
                if bit_done {
                    if self.bit_index < 7 {
                        next.bit_index = self.bit_index + 1;
                    } else {
                        next.bit_index = 0;
                        next.phase = TxPhase::Stop;
                    }
                }
            }
            TxPhase::Stop => {
                next.line = true;
                if bit_done {
                    next.phase = TxPhase::Idle;
                }
            }
        }
        next
    }

    /// Current line level (`true` = mark/high).
    pub fn line(&self) -> bool {
        self.line
    }

    pub fn is_busy(&self) -> bool {
        self.phase != TxPhase::Idle
    }

    pub fn phase(&self) -> TxPhase {
        self.phase
    }

    /// Byte latched for the frame in progress.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    pub fn bit_index(&self) -> u8 {
        self.bit_index
    }
}
