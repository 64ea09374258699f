//! Workout session flow for a single exercise.
//!
//! A session tracks "set N of M" and decides which phase and duration the
//! rest timer gets next. The timer itself never changes phase; the session is
//! the caller that does.

use serde::{Deserialize, Serialize};

use crate::timer::IntervalTimer;
use crate::types::{TimerConfig, TimerPhase, MAX_DURATION_SECONDS};

// ============================================================================
// Exercise
// ============================================================================

/// Difficulty level of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns the user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Начинающий",
            Difficulty::Intermediate => "Опытный",
            Difficulty::Advanced => "Профессионал",
        }
    }
}

/// Exercise definition consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub sets: u32,
    pub reps: u32,
    /// Rest between sets in seconds
    pub rest_between_sets: u32,
    /// Rest before the next exercise in seconds
    #[serde(default)]
    pub rest_between_exercises: Option<u32>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Exercise {
    /// Creates an exercise with the fields the timer needs.
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, rest_between_sets: u32) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            muscle_groups: Vec::new(),
            difficulty: Difficulty::default(),
            sets,
            reps,
            rest_between_sets,
            rest_between_exercises: None,
            instructions: Vec::new(),
            tips: Vec::new(),
        }
    }

    /// Sets the rest before the next exercise.
    pub fn with_rest_between_exercises(mut self, seconds: u32) -> Self {
        self.rest_between_exercises = Some(seconds);
        self
    }

    /// Validates the exercise.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("название упражнения не может быть пустым".to_string());
        }
        if self.sets == 0 {
            return Err("количество подходов должно быть не меньше 1".to_string());
        }
        if self.rest_between_sets == 0 || self.rest_between_sets > MAX_DURATION_SECONDS {
            return Err(format!(
                "отдых между подходами должен быть от 1 до {} секунд",
                MAX_DURATION_SECONDS
            ));
        }
        if let Some(rest) = self.rest_between_exercises {
            if rest == 0 || rest > MAX_DURATION_SECONDS {
                return Err(format!(
                    "отдых между упражнениями должен быть от 1 до {} секунд",
                    MAX_DURATION_SECONDS
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// WorkoutSession
// ============================================================================

/// What happens after a set is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Rest before the next set
    Rest {
        /// Set that comes after the rest
        next_set: u32,
        /// Rest duration in seconds
        seconds: u32,
    },
    /// All sets done; break before the next exercise
    ExerciseComplete {
        /// Break duration in seconds
        seconds: u32,
    },
}

impl SessionStep {
    /// Returns the timer phase for this step.
    pub fn phase(&self) -> TimerPhase {
        match self {
            SessionStep::Rest { .. } => TimerPhase::Rest,
            SessionStep::ExerciseComplete { .. } => TimerPhase::Break,
        }
    }

    /// Returns the countdown duration for this step.
    pub fn seconds(&self) -> u32 {
        match self {
            SessionStep::Rest { seconds, .. } | SessionStep::ExerciseComplete { seconds } => {
                *seconds
            }
        }
    }
}

/// Set/rest progression for one exercise.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    exercise: Option<Exercise>,
    config: TimerConfig,
    current_set: u32,
    phase: TimerPhase,
    finished: bool,
}

impl WorkoutSession {
    /// Creates a session at set 1 in the work phase.
    pub fn new(exercise: Option<Exercise>, config: TimerConfig) -> Self {
        Self {
            exercise,
            config,
            current_set: 1,
            phase: TimerPhase::Work,
            finished: false,
        }
    }

    /// Returns the exercise, if any.
    pub fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    /// Returns the 1-based set in progress.
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    /// Returns the total number of sets (1 without an exercise).
    pub fn total_sets(&self) -> u32 {
        self.exercise.as_ref().map_or(1, |e| e.sets.max(1))
    }

    /// Returns the phase the session is in.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Returns true once the last set has been completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Duration the timer starts with: the exercise rest or the fallback.
    pub fn initial_seconds(&self) -> u32 {
        self.rest_seconds()
    }

    fn rest_seconds(&self) -> u32 {
        self.exercise
            .as_ref()
            .map_or(self.config.default_rest_seconds, |e| e.rest_between_sets)
    }

    fn break_seconds(&self) -> u32 {
        self.exercise
            .as_ref()
            .and_then(|e| e.rest_between_exercises)
            .unwrap_or(self.config.default_break_seconds)
    }

    /// Marks the current set as done and returns the next step.
    pub fn complete_set(&mut self) -> SessionStep {
        if !self.finished && self.current_set < self.total_sets() {
            self.current_set += 1;
            self.phase = TimerPhase::Rest;
            SessionStep::Rest {
                next_set: self.current_set,
                seconds: self.rest_seconds(),
            }
        } else {
            self.finished = true;
            self.phase = TimerPhase::Break;
            SessionStep::ExerciseComplete {
                seconds: self.break_seconds(),
            }
        }
    }

    /// Returns to the (untimed) work phase for the current set.
    pub fn begin_work(&mut self) {
        self.phase = TimerPhase::Work;
    }

    /// Assigns the step's phase and duration to the timer.
    pub fn apply_to(&self, step: SessionStep, timer: &mut IntervalTimer) {
        timer.set_phase(step.phase());
        timer.reset(step.seconds());
    }

    /// Returns "set N of M" progress text.
    pub fn progress_label(&self) -> String {
        match &self.exercise {
            Some(exercise) => format!(
                "Подход {} из {} • {} повторений",
                self.current_set, exercise.sets, exercise.reps
            ),
            None => format!("Подход {}", self.current_set),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn bench_press() -> Exercise {
        Exercise::new("Жим лёжа", 3, 10, 90)
    }

    // ------------------------------------------------------------------------
    // Exercise Tests
    // ------------------------------------------------------------------------

    mod exercise_tests {
        use super::*;

        #[test]
        fn test_deserialize_camel_case() {
            let json = r#"{
                "id": "6",
                "name": "Приседания со штангой",
                "difficulty": "intermediate",
                "sets": 4,
                "reps": 8,
                "restBetweenSets": 120,
                "restBetweenExercises": 180,
                "muscleGroups": ["Ноги"]
            }"#;
            let exercise: Exercise = serde_json::from_str(json).unwrap();

            assert_eq!(exercise.difficulty, Difficulty::Intermediate);
            assert_eq!(exercise.sets, 4);
            assert_eq!(exercise.rest_between_sets, 120);
            assert_eq!(exercise.rest_between_exercises, Some(180));
            assert!(exercise.tips.is_empty());
        }

        #[test]
        fn test_deserialize_missing_required_field() {
            let json = r#"{"name":"Планка","sets":3}"#;
            assert!(serde_json::from_str::<Exercise>(json).is_err());
        }

        #[test]
        fn test_validate_success() {
            assert!(bench_press().validate().is_ok());
        }

        #[test]
        fn test_validate_zero_sets() {
            let exercise = Exercise::new("Жим", 0, 10, 60);
            assert!(exercise.validate().is_err());
        }

        #[test]
        fn test_validate_zero_rest() {
            let exercise = Exercise::new("Жим", 3, 10, 0);
            assert!(exercise.validate().is_err());
        }

        #[test]
        fn test_validate_blank_name() {
            let exercise = Exercise::new("  ", 3, 10, 60);
            assert!(exercise.validate().is_err());
        }

        #[test]
        fn test_difficulty_labels() {
            assert_eq!(Difficulty::Beginner.label(), "Начинающий");
            assert_eq!(Difficulty::Advanced.label(), "Профессионал");
        }
    }

    // ------------------------------------------------------------------------
    // WorkoutSession Tests
    // ------------------------------------------------------------------------

    mod session_tests {
        use super::*;

        #[test]
        fn test_initial_seconds_from_exercise() {
            let session = WorkoutSession::new(Some(bench_press()), TimerConfig::default());
            assert_eq!(session.initial_seconds(), 90);
            assert_eq!(session.phase(), TimerPhase::Work);
            assert_eq!(session.current_set(), 1);
        }

        #[test]
        fn test_initial_seconds_fallback() {
            let session = WorkoutSession::new(None, TimerConfig::default());
            assert_eq!(session.initial_seconds(), 60);
            assert_eq!(session.total_sets(), 1);
        }

        #[test]
        fn test_rest_between_sets_then_break() {
            let mut session = WorkoutSession::new(Some(bench_press()), TimerConfig::default());

            assert_eq!(
                session.complete_set(),
                SessionStep::Rest {
                    next_set: 2,
                    seconds: 90
                }
            );
            assert_eq!(session.phase(), TimerPhase::Rest);

            session.begin_work();
            assert_eq!(session.phase(), TimerPhase::Work);

            assert_eq!(
                session.complete_set(),
                SessionStep::Rest {
                    next_set: 3,
                    seconds: 90
                }
            );
            assert_eq!(
                session.complete_set(),
                SessionStep::ExerciseComplete { seconds: 120 }
            );
            assert_eq!(session.phase(), TimerPhase::Break);
            assert!(session.is_finished());
        }

        #[test]
        fn test_break_uses_exercise_rest() {
            let exercise = Exercise::new("Тяга", 1, 5, 60).with_rest_between_exercises(180);
            let mut session = WorkoutSession::new(Some(exercise), TimerConfig::default());

            assert_eq!(
                session.complete_set(),
                SessionStep::ExerciseComplete { seconds: 180 }
            );
        }

        #[test]
        fn test_break_uses_configured_default() {
            let config = TimerConfig::default().with_default_break_seconds(150);
            let mut session = WorkoutSession::new(None, config);

            assert_eq!(
                session.complete_set(),
                SessionStep::ExerciseComplete { seconds: 150 }
            );
        }

        #[test]
        fn test_complete_after_finish_stays_finished() {
            let mut session = WorkoutSession::new(None, TimerConfig::default());
            session.complete_set();

            let step = session.complete_set();

            assert!(matches!(step, SessionStep::ExerciseComplete { .. }));
            assert_eq!(session.current_set(), 1);
        }

        #[test]
        fn test_progress_label() {
            let mut session = WorkoutSession::new(Some(bench_press()), TimerConfig::default());
            assert_eq!(session.progress_label(), "Подход 1 из 3 • 10 повторений");

            session.complete_set();
            assert_eq!(session.progress_label(), "Подход 2 из 3 • 10 повторений");

            let session = WorkoutSession::new(None, TimerConfig::default());
            assert_eq!(session.progress_label(), "Подход 1");
        }

        #[test]
        fn test_step_phase_and_seconds() {
            let rest = SessionStep::Rest {
                next_set: 2,
                seconds: 45,
            };
            assert_eq!(rest.phase(), TimerPhase::Rest);
            assert_eq!(rest.seconds(), 45);

            let done = SessionStep::ExerciseComplete { seconds: 120 };
            assert_eq!(done.phase(), TimerPhase::Break);
            assert_eq!(done.seconds(), 120);
        }

        #[test]
        fn test_apply_to_timer() {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut timer = IntervalTimer::new(60, tx);
            let mut session = WorkoutSession::new(Some(bench_press()), TimerConfig::default());

            let step = session.complete_set();
            session.apply_to(step, &mut timer);

            assert_eq!(timer.phase(), TimerPhase::Rest);
            assert_eq!(timer.remaining_seconds(), 90);
            assert!(!timer.is_running());
        }
    }
}
