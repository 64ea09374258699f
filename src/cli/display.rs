//! Display utilities for the GymMaster CLI.
//!
//! This module provides formatted output for:
//! - Countdown rendering (`MM:SS` with phase label)
//! - Session progress
//! - Presets list
//! - Nutrition recommendations
//! - Error messages

use std::io::{self, Write};

use crate::nutrition::NutritionPlan;
use crate::types::{format_clock, format_preset, TimerPhase, TimerState};

/// Terminal bell.
const BELL: &str = "\x07";

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the header for a new countdown.
    pub fn show_countdown_start(state: &TimerState) {
        println!("> {}", state.phase.label());
    }

    /// Redraws the countdown line in place.
    pub fn show_countdown(remaining_seconds: u32, phase: TimerPhase) {
        print!("\r{}", Self::countdown_line(remaining_seconds, phase));
        let _ = io::stdout().flush();
    }

    /// Shows the expiry message, optionally ringing the bell.
    pub fn show_expired(bell: bool) {
        println!("\r{}  Время истекло!", format_clock(0));
        if bell {
            print!("{}", BELL);
        }
        println!("Можете начинать следующий подход");
    }

    /// Shows that a countdown was cancelled.
    pub fn show_cancelled(remaining_seconds: u32) {
        println!();
        println!("[] Таймер остановлен на {}", format_clock(remaining_seconds));
    }

    /// Shows that the countdown cannot start because it is already at zero.
    pub fn show_nothing_to_count() {
        println!("Время уже истекло: выберите новую длительность");
    }

    /// Shows the current set progress.
    pub fn show_set_prompt(progress: &str) {
        println!();
        println!("{}", progress);
        println!("Нажмите Enter, когда закончите подход");
    }

    /// Shows the end-of-exercise message.
    pub fn show_exercise_complete(name: &str) {
        println!();
        println!("* Упражнение «{}» выполнено", name);
    }

    /// Shows the configured presets.
    pub fn show_presets(presets: &[u32]) {
        println!("Быстрые настройки");
        println!("─────────────────");
        for &seconds in presets {
            println!("{:>5}  {}", format_preset(seconds), format_clock(seconds));
        }
    }

    /// Shows the nutrition recommendations.
    pub fn show_nutrition_plan(plan: &NutritionPlan) {
        for line in Self::nutrition_lines(plan) {
            println!("{}", line);
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Ошибка: {}", message);
    }

    /// Formats one countdown line.
    fn countdown_line(remaining_seconds: u32, phase: TimerPhase) -> String {
        format!("{}  {}", format_clock(remaining_seconds), phase.label())
    }

    /// Formats the nutrition plan.
    fn nutrition_lines(plan: &NutritionPlan) -> Vec<String> {
        vec![
            "Ваши рекомендации".to_string(),
            "─────────────────".to_string(),
            format!("Калории: {} ккал/день", plan.calories),
            format!("Белки: {}г", plan.protein_g),
            format!("Жиры: {}г", plan.fat_g),
            format!("Углеводы: {}г", plan.carbs_g),
            format!("Вода: {}мл/день", plan.water_ml),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
