//! Command definitions for the GymMaster CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::nutrition::{ActivityLevel, Gender, Goal, NutritionProfile};
use crate::types::TimerPhase;

// ============================================================================
// CLI Structure
// ============================================================================

/// GymMaster - workout rest timer and nutrition calculator
#[derive(Parser, Debug)]
#[command(
    name = "gymmaster",
    version,
    about = "Таймер отдыха и калькулятор калорий для тренировок",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON timer configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run a single countdown
    Timer(TimerArgs),

    /// Walk through the sets of one exercise with rest countdowns
    Session(SessionArgs),

    /// List the quick-select durations
    Presets,

    /// Calculate daily calories and macronutrients
    Nutrition(NutritionArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Timer Command Arguments
// ============================================================================

/// Arguments for the timer command
#[derive(Args, Debug, Clone)]
pub struct TimerArgs {
    /// Countdown duration in seconds (defaults to the configured rest time)
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "preset")]
    pub seconds: Option<i64>,

    /// Quick-select duration in seconds (one of the configured presets)
    #[arg(short, long)]
    pub preset: Option<u32>,

    /// Phase label for the countdown
    #[arg(long, value_enum, default_value_t = TimerPhase::Rest)]
    pub phase: TimerPhase,

    /// Do not ring the terminal bell on expiry
    #[arg(long)]
    pub no_bell: bool,
}

// ============================================================================
// Session Command Arguments
// ============================================================================

/// Arguments for the session command
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// JSON file with the exercise definition
    #[arg(short, long, conflicts_with_all = ["name", "sets", "reps", "rest"])]
    pub exercise: Option<PathBuf>,

    /// Exercise name
    #[arg(short, long, default_value = "Упражнение")]
    pub name: String,

    /// Number of sets (1-20)
    #[arg(
        long,
        default_value = "3",
        value_parser = clap::value_parser!(u32).range(1..=20)
    )]
    pub sets: u32,

    /// Repetitions per set
    #[arg(long, default_value = "10")]
    pub reps: u32,

    /// Rest between sets in seconds (defaults to the configured rest time)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=5999))]
    pub rest: Option<u32>,

    /// Do not ring the terminal bell on expiry
    #[arg(long)]
    pub no_bell: bool,
}

// ============================================================================
// Nutrition Command Arguments
// ============================================================================

/// Arguments for the nutrition command
#[derive(Args, Debug, Clone)]
pub struct NutritionArgs {
    /// Age in years (15-80)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(15..=80)
    )]
    pub age: u32,

    /// Weight in kilograms
    #[arg(short, long)]
    pub weight: f64,

    /// Height in centimetres
    #[arg(long)]
    pub height: f64,

    /// Gender
    #[arg(short, long, value_enum, default_value_t = Gender::Male)]
    pub gender: Gender,

    /// Activity level
    #[arg(long, value_enum, default_value_t = ActivityLevel::Medium)]
    pub activity: ActivityLevel,

    /// Goal
    #[arg(long, value_enum, default_value_t = Goal::Maintain)]
    pub goal: Goal,
}

impl NutritionArgs {
    /// Converts the arguments into a calculator profile.
    pub fn to_profile(&self) -> NutritionProfile {
        NutritionProfile {
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            gender: self.gender,
            activity: self.activity,
            goal: self.goal,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
