//! Contradiction fault monitor.
//!
//! Every tick the monitor re-evaluates whether the decision engine is
//! asking for heating and cooling at the same time.  The flag is purely
//! combinational over the demand snapshot: it clears on the tick after the
//! contradiction resolves.  A fault is advisory; actuation carries on
//! normally and the serial reporter announces the episode.
//!
//! ## Fault lifecycle
//!
//! 1. Demand snapshot has `heat && cool`.
//! 2. The monitor commits `fault = true` and counts a new episode if the
//!    previous tick was clear.
//! 3. The reporter sends one diagnostic byte for the episode.
//! 4. When the contradiction resolves, `fault` clears on the next tick.

use log::{info, warn};

use crate::control::ActuatorDemand;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultMonitor {
    fault: bool,
    /// Rising edges seen since reset (saturating).
    episodes: u32,
}

impl FaultMonitor {
    pub const fn new() -> Self {
        Self {
            fault: false,
            episodes: 0,
        }
    }

    /// Evaluate the contradiction rule against this tick's demand.
    #[must_use]
    pub fn next(&self, demand: &ActuatorDemand) -> Self {
        let fault = demand.is_contradictory();
        let mut episodes = self.episodes;

        if fault && !self.fault {
            episodes = episodes.saturating_add(1);
            warn!("FAULT SET: heat and cool demanded together (episode {episodes})");
        } else if !fault && self.fault {
            info!("FAULT CLEARED");
        }

        Self { fault, episodes }
    }

    pub fn is_faulted(&self) -> bool {
        self.fault
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }
}
