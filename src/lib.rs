//! GrowBox controller library.
//!
//! Sensor conditioning and decision pipeline for a closed-loop crop
//! environment controller: per-channel debounce, rolling history, profile
//! thresholding, manual override, contradiction faults, and a one-byte
//! serial fault reporter.  Everything advances on a synchronous tick and
//! runs on the host with no hardware attached.

#![deny(unused_must_use)]

pub mod app;
pub mod bus;
pub mod config;
pub mod control;
pub mod history;
pub mod profile;
pub mod reporting;
pub mod safety;
pub mod sensors;

pub mod adapters;
pub mod drivers;

mod error;

pub use error::{Error, Result};
