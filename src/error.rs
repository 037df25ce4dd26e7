//! Unified error types for the controller core.
//!
//! The tick pipeline itself never fails: every input is a 2-bit field and
//! every derived value stays in range by construction.  Errors only exist at
//! the edges, where a wider integer is narrowed into a domain type or a
//! configuration is accepted.  All variants are `Copy` so they can be
//! passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor level outside `0..=3` was offered.
    InvalidLevel(u8),
    /// A crop selector outside `0..=3` was offered.
    InvalidSelector(u8),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel(raw) => write!(f, "sensor level out of range: {raw}"),
            Self::InvalidSelector(raw) => write!(f, "crop selector out of range: {raw}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
