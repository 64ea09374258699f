//! GymMaster Library
//!
//! This library provides the core functionality for the GymMaster CLI.
//! It includes:
//! - Interval timer with start/pause/reset controls and per-second events
//! - Workout session flow assigning work/rest/break phases to the timer
//! - Daily calorie and macronutrient calculator
//! - CLI command parsing, countdown rendering and display utilities
//! - Type definitions for timer state and configuration

pub mod cli;
pub mod nutrition;
pub mod session;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_clock, TimerConfig, TimerPhase, TimerState, TimerStatus, DEFAULT_PRESETS,
    MAX_DURATION_SECONDS,
};

pub use timer::{IntervalTimer, TimerError, TimerEvent};

pub use session::{Exercise, SessionStep, WorkoutSession};

pub use nutrition::{NutritionError, NutritionPlan, NutritionProfile};
