//! Timer module for the workout rest timer.
//!
//! This module contains the countdown core:
//! - `engine`: interval timer with start/pause/reset controls and tick events
//! - `error`: duration and configuration errors

pub mod engine;
pub mod error;

pub use engine::{IntervalTimer, TimerEvent};
pub use error::{validate_duration, TimerError};
