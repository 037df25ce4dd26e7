//! Rolling history of filtered sensor levels.
//!
//! Each channel keeps an 8-slot ring of the most recent logged levels plus
//! monotone-widening extremes and a trend indicator.  The log is a purely
//! diagnostic side channel: nothing in the actuation path reads it.
//!
//! ```text
//!  slot:   0   1   2   3   4   5   6   7
//!        ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!        │ 2 │ 2 │ 2 │ 2 │ 2 │ 2 │ 2 │ 2 │   reset state
//!        └───┴───┴───┴───┴───┴───┴───┴───┘
//!          ▲ cursor (next write)
//! ```
//!
//! ## Trend at slot 0
//!
//! The trend compares the new value against the slot just behind the
//! cursor, except when the cursor sits at slot 0: there the previous trend
//! is kept and slot 7 is never consulted.

use heapless::Vec;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::sensors::{Channel, Level, SensorLevels};

/// Ring capacity per channel.
pub const HISTORY_DEPTH: usize = 8;

/// Direction of the most recent logged transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

// ---------------------------------------------------------------------------
// Per-channel log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLog {
    slots: [Level; HISTORY_DEPTH],
    cursor: usize,
    min: Level,
    max: Level,
    trend: Trend,
    writes: u32,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub const fn new() -> Self {
        Self {
            slots: [Level::OPTIMAL; HISTORY_DEPTH],
            cursor: 0,
            min: Level::OPTIMAL,
            max: Level::OPTIMAL,
            trend: Trend::Flat,
            writes: 0,
        }
    }

    /// State after logging `value` at the cursor.
    #[must_use]
    pub fn record(&self, value: Level) -> Self {
        let mut next = *self;
        next.slots[self.cursor] = value;
        next.min = self.min.min(value);
        next.max = self.max.max(value);

        if self.cursor != 0 {
            let previous = self.slots[self.cursor - 1];
            next.trend = match value.cmp(&previous) {
                core::cmp::Ordering::Greater => Trend::Up,
                core::cmp::Ordering::Less => Trend::Down,
                core::cmp::Ordering::Equal => Trend::Flat,
            };
        }

        next.cursor = (self.cursor + 1) % HISTORY_DEPTH;
        next.writes = self.writes.saturating_add(1);
        next
    }

    /// Slots in storage order (slot 0 first).
    pub fn entries(&self) -> &[Level; HISTORY_DEPTH] {
        &self.slots
    }

    /// Slots ordered oldest to newest.
    pub fn chronological(&self) -> Vec<Level, HISTORY_DEPTH> {
        self.slots[self.cursor..]
            .iter()
            .chain(&self.slots[..self.cursor])
            .copied()
            .collect()
    }

    /// Most recently written slot.
    pub fn latest(&self) -> Level {
        self.slots[(self.cursor + HISTORY_DEPTH - 1) % HISTORY_DEPTH]
    }

    pub fn min(&self) -> Level {
        self.min
    }

    pub fn max(&self) -> Level {
        self.max
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Index of the next slot to be written.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total writes since reset (saturating).
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

// ---------------------------------------------------------------------------
// Bank of logs sharing one interval counter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryBank {
    interval_ticks: u32,
    logs: [HistoryLog; Channel::COUNT],
}

impl Default for HistoryBank {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBank {
    pub const fn new() -> Self {
        Self {
            interval_ticks: 0,
            logs: [HistoryLog::new(); Channel::COUNT],
        }
    }

    /// Advance the interval counter; on expiry, log every channel's
    /// filtered level.
    #[must_use]
    pub fn next(&self, filtered: &SensorLevels, interval: u32) -> Self {
        if self.interval_ticks + 1 < interval {
            return Self {
                interval_ticks: self.interval_ticks + 1,
                ..*self
            };
        }

        let mut logs = self.logs;
        for channel in Channel::ALL {
            logs[channel.index()] = self.logs[channel.index()].record(filtered.get(channel));
        }
        debug!(
            "History write {}: T={} H={} L={} S={}",
            logs[Channel::Temperature.index()].writes(),
            filtered.temperature.bits(),
            filtered.humidity.bits(),
            filtered.light.bits(),
            filtered.soil_moisture.bits(),
        );
        Self {
            interval_ticks: 0,
            logs,
        }
    }

    pub fn log(&self, channel: Channel) -> &HistoryLog {
        &self.logs[channel.index()]
    }

    /// Ticks elapsed in the current interval.
    pub fn interval_ticks(&self) -> u32 {
        self.interval_ticks
    }

    /// Writes performed so far (identical across channels).
    pub fn writes(&self) -> u32 {
        self.logs[Channel::Temperature.index()].writes()
    }
}
