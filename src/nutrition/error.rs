//! Nutrition calculator error types.

use thiserror::Error;

/// Errors returned for profiles outside the supported range.
#[derive(Debug, Error, PartialEq)]
pub enum NutritionError {
    /// Age outside 15-80 years.
    #[error("возраст должен быть от {min} до {max} лет, указано: {0}", min = super::MIN_AGE, max = super::MAX_AGE)]
    AgeOutOfRange(u32),

    /// Weight outside the supported range or not a number.
    #[error("вес должен быть от {min} до {max} кг, указано: {0}", min = super::MIN_WEIGHT_KG, max = super::MAX_WEIGHT_KG)]
    WeightOutOfRange(f64),

    /// Height outside the supported range or not a number.
    #[error("рост должен быть от {min} до {max} см, указано: {0}", min = super::MIN_HEIGHT_CM, max = super::MAX_HEIGHT_CM)]
    HeightOutOfRange(f64),
}

impl NutritionError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::AgeOutOfRange(_) => "калькулятор рассчитан на возраст от 15 до 80 лет",
            Self::WeightOutOfRange(_) => "укажите вес в килограммах",
            Self::HeightOutOfRange(_) => "укажите рост в сантиметрах",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NutritionError::AgeOutOfRange(12);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("от 15 до 80"));

        let err = NutritionError::WeightOutOfRange(5.0);
        assert!(err.to_string().contains("кг"));

        let err = NutritionError::HeightOutOfRange(40.0);
        assert!(err.to_string().contains("см"));
    }

    #[test]
    fn test_suggestion() {
        assert!(NutritionError::AgeOutOfRange(90).suggestion().contains("80"));
        assert!(NutritionError::WeightOutOfRange(0.0)
            .suggestion()
            .contains("килограммах"));
        assert!(NutritionError::HeightOutOfRange(0.0)
            .suggestion()
            .contains("сантиметрах"));
    }
}
