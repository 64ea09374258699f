//! CLI module for GymMaster.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `runner`: Countdown and session loops driving the interval timer
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;
pub mod runner;

pub use commands::{Cli, Commands, NutritionArgs, SessionArgs, TimerArgs};
pub use display::Display;
pub use runner::{run_countdown, run_session, run_timer, CountdownOutcome};
