//! Interval timer engine.
//!
//! This module provides the countdown behind the rest timer:
//! - One decrement per second with `tokio::time::interval_at`
//! - Start/pause/reset/set-duration controls that return immediately
//! - Event delivery to a single observer channel
//! - Cancellation of the pending tick on pause, reset, shutdown and drop

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, trace, warn};

use super::error::{validate_duration, TimerError};
use crate::types::{TimerPhase, TimerState, TimerStatus, DEFAULT_REST_SECONDS};

/// Length of one tick.
const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// Events delivered to the timer's observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown armed
    Started {
        /// Seconds left when the countdown was armed
        remaining_seconds: u32,
        /// Phase of the countdown
        phase: TimerPhase,
    },
    /// Countdown paused
    Paused {
        /// Seconds left at the time of the pause
        remaining_seconds: u32,
    },
    /// Countdown stopped and re-armed with a new duration
    Reset {
        /// New duration
        remaining_seconds: u32,
    },
    /// One second elapsed
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// Countdown reached zero (fires exactly once per cycle)
    Expired {
        /// Phase of the countdown that expired
        phase: TimerPhase,
    },
}

// ============================================================================
// Shared state
// ============================================================================

/// State shared between the timer handle and its tick task.
struct Shared {
    state: TimerState,
    /// Bumped on every arm and cancel; a tick task only acts while its
    /// generation is current.
    generation: u64,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl Shared {
    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            trace!("Timer event dropped: observer is gone");
        }
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state.is_running = false;
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// IntervalTimer
// ============================================================================

/// Countdown timer that notifies its observer once per elapsed second.
///
/// The timer is an owned value with no global state. Controls must be called
/// from within a tokio runtime, since `start` spawns the tick task.
pub struct IntervalTimer {
    shared: Arc<Mutex<Shared>>,
    ticker: Option<JoinHandle<()>>,
}

impl IntervalTimer {
    /// Creates an idle timer with the given duration in the work phase.
    pub fn new(initial_seconds: u32, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: TimerState::new(initial_seconds, TimerPhase::default()),
                generation: 0,
                event_tx,
            })),
            ticker: None,
        }
    }

    /// Creates an idle timer with the fallback rest duration.
    pub fn with_default_duration(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self::new(DEFAULT_REST_SECONDS, event_tx)
    }

    /// Sets the initial phase label.
    pub fn with_phase(mut self, phase: TimerPhase) -> Self {
        self.set_phase(phase);
        self
    }

    /// Starts ticking.
    ///
    /// No-op when already running or when the countdown is at zero; call
    /// [`reset`](Self::reset) or [`set_duration`](Self::set_duration) first
    /// to re-arm an expired timer. Returns true if the countdown was armed.
    pub fn start(&mut self) -> bool {
        let mut shared = lock(&self.shared);
        if shared.state.is_running {
            debug!("Start ignored: timer is already running");
            return false;
        }
        if shared.state.remaining_seconds == 0 {
            debug!("Start ignored: countdown is at zero");
            return false;
        }

        shared.state.is_running = true;
        shared.generation = shared.generation.wrapping_add(1);
        let generation = shared.generation;
        let remaining_seconds = shared.state.remaining_seconds;
        let phase = shared.state.phase;
        shared.emit(TimerEvent::Started {
            remaining_seconds,
            phase,
        });
        drop(shared);

        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        // Catch up on late wakeups so every elapsed second is counted.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let task = tokio::spawn(run_ticker(Arc::clone(&self.shared), ticker, generation));
        if let Some(previous) = self.ticker.replace(task) {
            previous.abort();
        }

        debug!(remaining_seconds, phase = phase.as_str(), "Countdown started");
        true
    }

    /// Pauses the countdown, keeping the remaining time.
    ///
    /// No-op when not running. Returns true if the timer was paused.
    pub fn pause(&mut self) -> bool {
        let mut shared = lock(&self.shared);
        if !shared.state.is_running {
            return false;
        }

        shared.cancel();
        let remaining_seconds = shared.state.remaining_seconds;
        shared.emit(TimerEvent::Paused { remaining_seconds });
        drop(shared);

        self.abort_ticker();
        debug!(remaining_seconds, "Countdown paused");
        true
    }

    /// Starts the countdown if idle, pauses it if running.
    ///
    /// Returns true if the timer is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
            false
        } else {
            self.start()
        }
    }

    /// Stops the countdown and sets a new duration.
    pub fn reset(&mut self, to_seconds: u32) {
        let mut shared = lock(&self.shared);
        shared.cancel();
        shared.state.remaining_seconds = to_seconds;
        shared.emit(TimerEvent::Reset {
            remaining_seconds: to_seconds,
        });
        drop(shared);

        self.abort_ticker();
        debug!(remaining_seconds = to_seconds, "Countdown reset");
    }

    /// Stops the countdown and sets a new duration from unchecked input.
    ///
    /// # Errors
    ///
    /// Rejects negative durations and durations above the display limit.
    /// The timer state is left untouched on error.
    pub fn set_duration(&mut self, seconds: i64) -> Result<(), TimerError> {
        let seconds = validate_duration(seconds).inspect_err(|e| {
            warn!("Rejected timer duration: {}", e);
        })?;
        self.reset(seconds);
        Ok(())
    }

    /// Changes the phase label. Countdown mechanics are unaffected.
    pub fn set_phase(&mut self, phase: TimerPhase) {
        lock(&self.shared).state.phase = phase;
    }

    /// Cancels any pending tick and stops the countdown.
    ///
    /// The remaining time is kept and no event is emitted.
    pub fn shutdown(&mut self) {
        lock(&self.shared).cancel();
        self.abort_ticker();
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> TimerState {
        lock(&self.shared).state.clone()
    }

    /// Returns the remaining seconds.
    pub fn remaining_seconds(&self) -> u32 {
        lock(&self.shared).state.remaining_seconds
    }

    /// Returns true if the countdown is ticking.
    pub fn is_running(&self) -> bool {
        lock(&self.shared).state.is_running
    }

    /// Returns the current phase label.
    pub fn phase(&self) -> TimerPhase {
        lock(&self.shared).state.phase
    }

    /// Returns the derived status.
    pub fn status(&self) -> TimerStatus {
        lock(&self.shared).state.status()
    }

    fn abort_ticker(&mut self) {
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ============================================================================
// Tick task
// ============================================================================

/// Runs the periodic tick until the countdown expires or is cancelled.
async fn run_ticker(shared: Arc<Mutex<Shared>>, mut ticker: Interval, generation: u64) {
    loop {
        ticker.tick().await;
        if !apply_tick(&shared, generation) {
            return;
        }
    }
}

/// Applies one tick. Returns false when no further ticks should run.
fn apply_tick(shared: &Mutex<Shared>, generation: u64) -> bool {
    let mut shared = lock(shared);
    if shared.generation != generation {
        trace!("Stale tick discarded");
        return false;
    }

    if shared.state.tick() {
        let phase = shared.state.phase;
        shared.emit(TimerEvent::Expired { phase });
        debug!(phase = phase.as_str(), "Countdown expired");
        return false;
    }
    if !shared.state.is_running {
        return false;
    }

    let remaining_seconds = shared.state.remaining_seconds;
    trace!(remaining_seconds, "Tick");
    shared.emit(TimerEvent::Tick { remaining_seconds });
    true
}

// ============================================================================
// Tests
// ============================================================================
