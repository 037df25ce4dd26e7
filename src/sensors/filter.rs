//! Per-channel debounce filter.
//!
//! A raw level is only accepted once it has been seen unchanged for a full
//! debounce window.  Any change restarts the window and leaves the filtered
//! output where it was, so glitches shorter than the window never reach
//! the decision engine.
//!
//! ## Timing
//!
//! | Tick          | `last_raw` | `stable_ticks` | `filtered` |
//! |---------------|------------|----------------|------------|
//! | change (t)    | new        | 0              | old        |
//! | t+1 ..= t+N   | new        | 1 ..= N        | old        |
//! | t+N+1 onwards | new        | N              | new        |
//!
//! where `N` is the configured threshold.  Once open, the output tracks the
//! raw input 1:1 until the input changes again.

use super::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceFilter {
    last_raw: Level,
    stable_ticks: u32,
    filtered: Level,
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceFilter {
    /// Reset state: output and shadow both optimal, window empty.
    pub const fn new() -> Self {
        Self {
            last_raw: Level::OPTIMAL,
            stable_ticks: 0,
            filtered: Level::OPTIMAL,
        }
    }

    /// State after one tick with `raw` on the input.
    #[must_use]
    pub fn next(&self, raw: Level, threshold: u32) -> Self {
        if raw != self.last_raw {
            return Self {
                last_raw: raw,
                stable_ticks: 0,
                filtered: self.filtered,
            };
        }

        if self.stable_ticks < threshold {
            Self {
                stable_ticks: self.stable_ticks + 1,
                ..*self
            }
        } else {
            Self {
                filtered: raw,
                ..*self
            }
        }
    }

    pub fn filtered(&self) -> Level {
        self.filtered
    }

    pub fn last_raw(&self) -> Level {
        self.last_raw
    }

    pub fn stable_ticks(&self) -> u32 {
        self.stable_ticks
    }

    /// True once the window has filled and the output follows the input.
    pub fn is_open(&self, threshold: u32) -> bool {
        self.stable_ticks >= threshold
    }
}
