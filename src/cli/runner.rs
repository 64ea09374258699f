//! Terminal front end for the interval timer.
//!
//! Owns one `IntervalTimer` per command, renders its events and cancels it
//! on Ctrl-C.

use std::future::Future;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::commands::{SessionArgs, TimerArgs};
use super::display::Display;
use crate::session::{Exercise, SessionStep, WorkoutSession};
use crate::timer::{IntervalTimer, TimerEvent};
use crate::types::TimerConfig;

/// How a countdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Reached zero
    Expired,
    /// Interrupted before reaching zero
    Cancelled {
        /// Seconds left at cancellation
        remaining_seconds: u32,
    },
    /// The countdown was already at zero
    NotStarted,
}

/// Resolves when the user presses Ctrl-C.
pub async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Interrupt received");
}

/// Starts the timer and renders it until it expires or `cancel` resolves.
pub async fn run_countdown<F>(
    timer: &mut IntervalTimer,
    events: &mut mpsc::UnboundedReceiver<TimerEvent>,
    bell: bool,
    cancel: F,
) -> CountdownOutcome
where
    F: Future<Output = ()>,
{
    let state = timer.state();
    Display::show_countdown_start(&state);
    Display::show_countdown(state.remaining_seconds, state.phase);

    if !timer.start() {
        Display::show_nothing_to_count();
        return CountdownOutcome::NotStarted;
    }

    tokio::pin!(cancel);
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(TimerEvent::Tick { remaining_seconds }) => {
                    Display::show_countdown(remaining_seconds, timer.phase());
                }
                Some(TimerEvent::Expired { .. }) => {
                    Display::show_expired(bell);
                    return CountdownOutcome::Expired;
                }
                Some(_) => {}
                None => {
                    let remaining_seconds = timer.remaining_seconds();
                    return CountdownOutcome::Cancelled { remaining_seconds };
                }
            },
            _ = &mut cancel => {
                timer.pause();
                let remaining_seconds = timer.remaining_seconds();
                Display::show_cancelled(remaining_seconds);
                return CountdownOutcome::Cancelled { remaining_seconds };
            }
        }
    }
}

/// Runs the `timer` command.
pub async fn run_timer(args: &TimerArgs, config: &TimerConfig) -> Result<CountdownOutcome> {
    let (tx, mut events) = mpsc::unbounded_channel();
    let mut timer = IntervalTimer::new(config.default_rest_seconds, tx).with_phase(args.phase);

    if let Some(preset) = args.preset {
        if !config.is_preset(preset) {
            bail!(
                "{} с нет среди быстрых настроек ({})",
                preset,
                preset_list(config)
            );
        }
        timer.set_duration(i64::from(preset))?;
    } else if let Some(seconds) = args.seconds {
        timer.set_duration(seconds)?;
    }

    let outcome = run_countdown(&mut timer, &mut events, !args.no_bell, interrupt_signal()).await;
    debug!(?outcome, "Timer command finished");
    Ok(outcome)
}

/// Runs the `session` command.
pub async fn run_session(args: &SessionArgs, config: &TimerConfig) -> Result<()> {
    let exercise = match &args.exercise {
        Some(path) => load_exercise(path)?,
        None => {
            let exercise = Exercise::new(
                args.name.clone(),
                args.sets,
                args.reps,
                args.rest.unwrap_or(config.default_rest_seconds),
            );
            exercise.validate().map_err(|e| anyhow!(e))?;
            exercise
        }
    };
    let name = exercise.name.clone();

    let (tx, mut events) = mpsc::unbounded_channel();
    let mut session = WorkoutSession::new(Some(exercise), config.clone());
    let mut timer = IntervalTimer::new(session.initial_seconds(), tx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(exercise = %name, sets = session.total_sets(), "Session started");

    loop {
        session.begin_work();
        Display::show_set_prompt(&session.progress_label());

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read from stdin")?,
            _ = interrupt_signal() => return Ok(()),
        };
        if line.is_none() {
            debug!("stdin closed, ending session");
            return Ok(());
        }

        let step = session.complete_set();
        session.apply_to(step, &mut timer);
        if matches!(step, SessionStep::ExerciseComplete { .. }) {
            Display::show_exercise_complete(&name);
        }

        let outcome = run_countdown(&mut timer, &mut events, !args.no_bell, interrupt_signal()).await;
        if matches!(outcome, CountdownOutcome::Cancelled { .. }) || session.is_finished() {
            return Ok(());
        }
    }
}

/// Loads and validates an exercise definition from a JSON file.
pub fn load_exercise(path: &Path) -> Result<Exercise> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read exercise file {}", path.display()))?;
    let exercise: Exercise = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse exercise file {}", path.display()))?;
    exercise.validate().map_err(|e| anyhow!(e))?;
    Ok(exercise)
}

fn preset_list(config: &TimerConfig) -> String {
    config
        .presets
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Tests
// ============================================================================
