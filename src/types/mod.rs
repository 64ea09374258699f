//! Core data types for the workout timer.
//!
//! This module defines the data structures used for:
//! - Countdown state and its derived status
//! - Phase labels (work set, rest between sets, break between exercises)
//! - Timer configuration with validation and JSON loading
//! - `MM:SS` clock formatting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::timer::TimerError;

/// Largest countdown that still fits the `MM:SS` display.
pub const MAX_DURATION_SECONDS: u32 = 99 * 60 + 59;

/// Fallback rest duration when no exercise data is known.
pub const DEFAULT_REST_SECONDS: u32 = 60;

/// Fallback break duration between exercises.
pub const DEFAULT_BREAK_SECONDS: u32 = 120;

/// Quick-select durations offered by the UI.
pub const DEFAULT_PRESETS: [u32; 6] = [30, 60, 90, 120, 180, 300];

// ============================================================================
// TimerPhase
// ============================================================================

/// Caller-assigned purpose of the current countdown.
///
/// The phase never changes the countdown mechanics; it only drives labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Working set
    #[default]
    Work,
    /// Rest between sets
    Rest,
    /// Break between exercises
    Break,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::Rest => "rest",
            TimerPhase::Break => "break",
        }
    }

    /// Returns the user-facing label of the phase.
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Work => "Рабочий подход",
            TimerPhase::Rest => "Отдых между подходами",
            TimerPhase::Break => "Отдых между упражнениями",
        }
    }
}

// ============================================================================
// TimerStatus
// ============================================================================

/// Derived lifecycle status of a countdown cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// Armed with a duration but not ticking
    Idle,
    /// Ticking once per second
    Running,
    /// Reached zero and stopped itself
    Expired,
}

// ============================================================================
// TimerState
// ============================================================================

/// Countdown state owned by an [`IntervalTimer`](crate::timer::IntervalTimer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left in the current countdown
    pub remaining_seconds: u32,
    /// Whether the countdown is actively ticking
    pub is_running: bool,
    /// Label of the current countdown
    pub phase: TimerPhase,
}

impl TimerState {
    /// Creates an idle state with the given duration.
    pub fn new(remaining_seconds: u32, phase: TimerPhase) -> Self {
        Self {
            remaining_seconds,
            is_running: false,
            phase,
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if this tick expired the countdown. Reaching zero stops
    /// the timer in the same transition.
    pub fn tick(&mut self) -> bool {
        if !self.is_running || self.remaining_seconds == 0 {
            return false;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            return true;
        }
        false
    }

    /// Returns the derived status.
    pub fn status(&self) -> TimerStatus {
        if self.is_running {
            TimerStatus::Running
        } else if self.remaining_seconds == 0 {
            TimerStatus::Expired
        } else {
            TimerStatus::Idle
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_REST_SECONDS, TimerPhase::Work)
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

fn default_break_seconds() -> u32 {
    DEFAULT_BREAK_SECONDS
}

fn default_presets() -> Vec<u32> {
    DEFAULT_PRESETS.to_vec()
}

/// Configuration for the rest timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Rest duration used when no exercise is selected
    #[serde(rename = "defaultRestSeconds", default = "default_rest_seconds")]
    pub default_rest_seconds: u32,
    /// Break duration between exercises
    #[serde(rename = "defaultBreakSeconds", default = "default_break_seconds")]
    pub default_break_seconds: u32,
    /// Quick-select durations in seconds
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_rest_seconds: default_rest_seconds(),
            default_break_seconds: default_break_seconds(),
            presets: default_presets(),
        }
    }
}

impl TimerConfig {
    /// Sets the default rest duration.
    pub fn with_default_rest_seconds(mut self, seconds: u32) -> Self {
        self.default_rest_seconds = seconds;
        self
    }

    /// Sets the default break duration.
    pub fn with_default_break_seconds(mut self, seconds: u32) -> Self {
        self.default_break_seconds = seconds;
        self
    }

    /// Replaces the preset list.
    pub fn with_presets(mut self, presets: Vec<u32>) -> Self {
        self.presets = presets;
        self
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, TimerError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TimerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TimerError> {
        if self.default_rest_seconds == 0 || self.default_rest_seconds > MAX_DURATION_SECONDS {
            return Err(TimerError::InvalidConfig(format!(
                "время отдыха должно быть от 1 до {} секунд",
                MAX_DURATION_SECONDS
            )));
        }
        if self.default_break_seconds == 0 || self.default_break_seconds > MAX_DURATION_SECONDS {
            return Err(TimerError::InvalidConfig(format!(
                "время перерыва должно быть от 1 до {} секунд",
                MAX_DURATION_SECONDS
            )));
        }
        if self.presets.is_empty() {
            return Err(TimerError::InvalidConfig(
                "список быстрых настроек пуст".to_string(),
            ));
        }
        if let Some(bad) = self
            .presets
            .iter()
            .find(|&&p| p == 0 || p > MAX_DURATION_SECONDS)
        {
            return Err(TimerError::InvalidConfig(format!(
                "недопустимая быстрая настройка: {} секунд",
                bad
            )));
        }
        Ok(())
    }

    /// Returns true if `seconds` is one of the configured presets.
    pub fn is_preset(&self, seconds: u32) -> bool {
        self.presets.contains(&seconds)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats a preset as a short button label (`30с`, `1м`, `1.5м`).
pub fn format_preset(seconds: u32) -> String {
    if seconds < 60 {
        format!("{}с", seconds)
    } else if seconds % 60 == 0 {
        format!("{}м", seconds / 60)
    } else if seconds % 30 == 0 {
        format!("{}.5м", seconds / 60)
    } else {
        format_clock(seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
