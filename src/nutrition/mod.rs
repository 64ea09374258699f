//! Daily calorie and macronutrient calculator.
//!
//! Uses the Mifflin-St Jeor equation for basal metabolic rate, scaled by an
//! activity multiplier and a goal multiplier. Macronutrients follow fixed
//! ratios: 2.2 g protein per kg, 25 % of calories from fat, carbohydrates
//! for the rest. Water is 35 ml per kg.

pub mod error;

use serde::{Deserialize, Serialize};

pub use error::NutritionError;

pub const MIN_AGE: u32 = 15;
pub const MAX_AGE: u32 = 80;
pub const MIN_WEIGHT_KG: f64 = 20.0;
pub const MAX_WEIGHT_KG: f64 = 400.0;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

const PROTEIN_GRAMS_PER_KG: f64 = 2.2;
const FAT_CALORIE_SHARE: f64 = 0.25;
const WATER_ML_PER_KG: f64 = 35.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ============================================================================
// Profile enums
// ============================================================================

/// Biological sex used by the BMR equation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

/// Daily activity level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Sedentary
    Low,
    /// Moderate activity
    #[default]
    Medium,
    /// High activity
    High,
}

impl ActivityLevel {
    /// Returns the TDEE multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Medium => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

/// Body weight goal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Lose weight
    Lose,
    /// Maintain weight
    #[default]
    Maintain,
    /// Gain mass
    Gain,
}

impl Goal {
    /// Returns the calorie multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Goal::Lose => 0.85,
            Goal::Maintain => 1.0,
            Goal::Gain => 1.15,
        }
    }
}

// ============================================================================
// Profile and plan
// ============================================================================

/// Calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl NutritionProfile {
    /// Validates the profile ranges.
    pub fn validate(&self) -> Result<(), NutritionError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(NutritionError::AgeOutOfRange(self.age));
        }
        if !self.weight_kg.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg)
        {
            return Err(NutritionError::WeightOutOfRange(self.weight_kg));
        }
        if !self.height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm)
        {
            return Err(NutritionError::HeightOutOfRange(self.height_cm));
        }
        Ok(())
    }

    /// Basal metabolic rate in kcal/day.
    pub fn bmr(&self) -> f64 {
        10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * f64::from(self.age)
            + self.gender.bmr_offset()
    }

    /// Total daily energy expenditure in kcal/day.
    pub fn tdee(&self) -> f64 {
        self.bmr() * self.activity.multiplier()
    }
}

/// Calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Target kcal per day
    pub calories: u32,
    /// Protein grams per day
    pub protein_g: u32,
    /// Fat grams per day
    pub fat_g: u32,
    /// Carbohydrate grams per day
    pub carbs_g: u32,
    /// Water millilitres per day
    pub water_ml: u32,
}

fn round_non_negative(value: f64) -> u32 {
    // Saturating float-to-int cast; negative values become 0.
    value.round().max(0.0) as u32
}

/// Calculates the daily plan for a profile.
///
/// # Errors
///
/// Returns an error if the profile is outside the supported ranges.
pub fn calculate(profile: &NutritionProfile) -> Result<NutritionPlan, NutritionError> {
    profile.validate()?;

    let calories = round_non_negative(profile.tdee() * profile.goal.multiplier());
    let protein_g = round_non_negative(profile.weight_kg * PROTEIN_GRAMS_PER_KG);
    let fat_g = round_non_negative(f64::from(calories) * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT);
    let carbs_g = round_non_negative(
        (f64::from(calories)
            - f64::from(protein_g) * KCAL_PER_GRAM_PROTEIN
            - f64::from(fat_g) * KCAL_PER_GRAM_FAT)
            / KCAL_PER_GRAM_CARBS,
    );
    let water_ml = round_non_negative(profile.weight_kg * WATER_ML_PER_KG);

    tracing::debug!(
        calories,
        protein_g,
        fat_g,
        carbs_g,
        water_ml,
        "Nutrition plan calculated"
    );

    Ok(NutritionPlan {
        calories,
        protein_g,
        fat_g,
        carbs_g,
        water_ml,
    })
}

// ============================================================================
// Tests
// ============================================================================
