//! Timer error types.
//!
//! Invalid durations are rejected at the `set_duration` and configuration
//! boundaries so the countdown can never hold a nonsensical value.

use thiserror::Error;

use crate::types::MAX_DURATION_SECONDS;

/// Errors that can occur when configuring the timer.
#[derive(Debug, Error)]
pub enum TimerError {
    /// A negative duration was supplied.
    #[error("длительность не может быть отрицательной: {0} с")]
    NegativeDuration(i64),

    /// The duration does not fit the `MM:SS` display.
    #[error("длительность слишком большая: {0} с (максимум {max} с)", max = MAX_DURATION_SECONDS)]
    DurationTooLong(i64),

    /// The configuration contains an invalid value.
    #[error("недопустимая конфигурация: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("не удалось прочитать файл конфигурации {path}: {source}")]
    ConfigRead {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("не удалось разобрать файл конфигурации: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl TimerError {
    /// Returns true if this error came from a rejected duration argument.
    #[must_use]
    pub fn is_duration_error(&self) -> bool {
        matches!(self, Self::NegativeDuration(_) | Self::DurationTooLong(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NegativeDuration(_) => "укажите количество секунд не меньше нуля",
            Self::DurationTooLong(_) => "укажите не больше 99 минут 59 секунд",
            Self::InvalidConfig(_) => "исправьте значения в файле конфигурации",
            Self::ConfigRead { .. } => "проверьте путь к файлу конфигурации",
            Self::ConfigParse(_) => "файл конфигурации должен быть в формате JSON",
        }
    }
}

/// Validates a caller-supplied duration.
///
/// Negative values and values above [`MAX_DURATION_SECONDS`] are rejected.
pub fn validate_duration(seconds: i64) -> Result<u32, TimerError> {
    if seconds < 0 {
        return Err(TimerError::NegativeDuration(seconds));
    }
    if seconds > i64::from(MAX_DURATION_SECONDS) {
        return Err(TimerError::DurationTooLong(seconds));
    }
    u32::try_from(seconds).map_err(|_| TimerError::DurationTooLong(seconds))
}
