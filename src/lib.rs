#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod controller;

pub use controller::{Error, Outcome, PulseConfig, PulseController};

/// How long the output is held high for each trigger, in milliseconds
pub const PULSE_MS: u32 = 75;

/// Hold-off after each pulse before the input is sampled again, in milliseconds
pub const DEBOUNCE_MS: u32 = 500;
