//! Liveness heartbeat.
//!
//! Free-running divider that inverts a single output bit every half period.
//! At the default 25 MHz tick rate and 25 M tick period this yields a 1 Hz
//! square wave.  Independent of every other component.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heartbeat {
    count: u32,
    level: bool,
}

impl Heartbeat {
    pub const fn new() -> Self {
        Self {
            count: 0,
            level: false,
        }
    }

    /// Advance one tick; toggles after `half_period` ticks.
    #[must_use]
    pub fn next(&self, half_period: u32) -> Self {
        if self.count + 1 >= half_period {
            Self {
                count: 0,
                level: !self.level,
            }
        } else {
            Self {
                count: self.count + 1,
                level: self.level,
            }
        }
    }

    pub fn level(&self) -> bool {
        self.level
    }
}
