//! Session clock implementation.
//!
//! The session clock is a tick-driven state machine. It owns no timer and
//! performs no I/O - the host calls `advance()` once per elapsed second.
//!
//! ## Phase Transitions
//!
//! ```text
//! Work(running) -> 00:00 -> Rest(paused) -> start -> Rest(running) -> 00:00 -> Work(paused)
//! ```
//!
//! A tick that takes the countdown from 1 to 0 only ticks; the *next* tick
//! performs the transition. The clock always pauses itself at a boundary.
//!
//! ## Usage
//!
//! ```ignore
//! let mut clock = SessionClock::new();
//! clock.start();
//! // Once per second:
//! if let Some(message) = clock.advance().message() {
//!     blinker.start(message);
//! }
//! ```

use std::ops::RangeInclusive;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::format::{format_clock, format_study};
use crate::error::ValidationError;
use crate::events::Event;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_REST_MINUTES: u32 = 5;

/// Accepted work duration, in minutes.
pub const WORK_MINUTES: RangeInclusive<u32> = 1..=60;
/// Accepted rest duration, in minutes.
pub const REST_MINUTES: RangeInclusive<u32> = 1..=30;

pub const WORK_COMPLETE_MESSAGE: &str = "🎉 Work Session Complete! Time for a break!";
pub const BREAK_OVER_MESSAGE: &str = "💪 Break Time Over! Ready to work?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Rest,
}

impl Phase {
    /// Human-readable badge text.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work Session",
            Phase::Rest => "Rest Break",
        }
    }

    pub fn next(self) -> Phase {
        match self {
            Phase::Work => Phase::Rest,
            Phase::Rest => Phase::Work,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Work => f.write_str("work"),
            Phase::Rest => f.write_str("rest"),
        }
    }
}

/// Outcome of a single `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Clock was paused; nothing changed.
    NoOp,
    /// One second was taken off the countdown.
    Ticked,
    /// A work phase finished and was counted.
    TransitionedToRest { message: &'static str },
    /// A rest phase finished.
    TransitionedToWork { message: &'static str },
}

impl Advance {
    /// The notification message carried by a transition.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Advance::TransitionedToRest { message } | Advance::TransitionedToWork { message } => {
                Some(message)
            }
            Advance::NoOp | Advance::Ticked => None,
        }
    }

    pub fn is_transition(&self) -> bool {
        self.message().is_some()
    }
}

/// Authoritative countdown and study statistics.
///
/// Mutated only through its commands; the host serializes all calls.
#[derive(Debug, Clone, Serialize)]
pub struct SessionClock {
    work_duration_secs: u32,
    rest_duration_secs: u32,
    /// Always within `0..=phase_duration_secs()`.
    remaining_secs: u32,
    phase: Phase,
    running: bool,
    /// Sum of configured work durations at each Work -> Rest transition.
    total_study_secs: u64,
    completed_sessions: u32,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// Create a clock with the default 25/5 minute durations.
    ///
    /// Starts paused at the beginning of a work phase.
    pub fn new() -> Self {
        Self::with_minutes(DEFAULT_WORK_MINUTES, DEFAULT_REST_MINUTES)
    }

    /// Create a clock with the given durations, clamped into range.
    pub fn with_minutes(work_minutes: u32, rest_minutes: u32) -> Self {
        let work_duration_secs = clamp_minutes(work_minutes, &WORK_MINUTES) * 60;
        let rest_duration_secs = clamp_minutes(rest_minutes, &REST_MINUTES) * 60;
        Self {
            work_duration_secs,
            rest_duration_secs,
            remaining_secs: work_duration_secs,
            phase: Phase::Work,
            running: false,
            total_study_secs: 0,
            completed_sessions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_study_secs(&self) -> u64 {
        self.total_study_secs
    }

    /// Accumulated study time in whole minutes.
    pub fn total_study_minutes(&self) -> u64 {
        self.total_study_secs / 60
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    pub fn work_duration_secs(&self) -> u32 {
        self.work_duration_secs
    }

    pub fn rest_duration_secs(&self) -> u32 {
        self.rest_duration_secs
    }

    /// Configured length of the current phase.
    pub fn phase_duration_secs(&self) -> u32 {
        match self.phase {
            Phase::Work => self.work_duration_secs,
            Phase::Rest => self.rest_duration_secs,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            running: self.running,
            remaining_secs: self.remaining_secs,
            clock: format_clock(self.remaining_secs),
            work_duration_secs: self.work_duration_secs,
            rest_duration_secs: self.rest_duration_secs,
            total_study_secs: self.total_study_secs,
            study_time: format_study(self.total_study_minutes()),
            completed_sessions: self.completed_sessions,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the work duration.
    ///
    /// An idle work phase picks the new length up immediately; otherwise it
    /// applies to the next work phase. A running work phase that is now
    /// shorter than its countdown is cut down to the new length.
    pub fn configure_work(&mut self, minutes: u32) -> Event {
        debug_assert!(WORK_MINUTES.contains(&minutes), "work minutes out of range");
        self.work_duration_secs = clamp_minutes(minutes, &WORK_MINUTES) * 60;
        if self.phase == Phase::Work {
            self.remaining_secs = if self.running {
                self.remaining_secs.min(self.work_duration_secs)
            } else {
                self.work_duration_secs
            };
        }
        tracing::debug!(minutes, remaining = self.remaining_secs, "work duration configured");
        Event::DurationChanged {
            phase: Phase::Work,
            duration_secs: self.work_duration_secs,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Set the rest duration. Mirrors `configure_work` for the rest phase.
    pub fn configure_rest(&mut self, minutes: u32) -> Event {
        debug_assert!(REST_MINUTES.contains(&minutes), "rest minutes out of range");
        self.rest_duration_secs = clamp_minutes(minutes, &REST_MINUTES) * 60;
        if self.phase == Phase::Rest {
            self.remaining_secs = if self.running {
                self.remaining_secs.min(self.rest_duration_secs)
            } else {
                self.rest_duration_secs
            };
        }
        tracing::debug!(minutes, remaining = self.remaining_secs, "rest duration configured");
        Event::DurationChanged {
            phase: Phase::Rest,
            duration_secs: self.rest_duration_secs,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Returns `None` when already running or when the countdown sits at zero.
    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        tracing::debug!(phase = %self.phase, remaining = self.remaining_secs, "clock started");
        Some(Event::ClockStarted {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Idempotent; returns `None` if the clock was not running.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        tracing::debug!(phase = %self.phase, remaining = self.remaining_secs, "clock paused");
        Some(Event::ClockPaused {
            phase: self.phase,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to an idle, full-length work phase. Statistics are kept.
    pub fn reset(&mut self) -> Event {
        self.phase = Phase::Work;
        self.remaining_secs = self.work_duration_secs;
        self.running = false;
        tracing::debug!("clock reset");
        Event::ClockReset {
            work_duration_secs: self.work_duration_secs,
            at: Utc::now(),
        }
    }

    /// Process one elapsed second.
    pub fn advance(&mut self) -> Advance {
        if !self.running {
            return Advance::NoOp;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return Advance::Ticked;
        }

        self.running = false;
        match self.phase {
            Phase::Work => {
                // Configured duration, not elapsed time.
                self.total_study_secs += u64::from(self.work_duration_secs);
                self.completed_sessions += 1;
                self.phase = Phase::Rest;
                self.remaining_secs = self.rest_duration_secs;
                tracing::info!(
                    completed_sessions = self.completed_sessions,
                    total_study_secs = self.total_study_secs,
                    "work session complete"
                );
                Advance::TransitionedToRest {
                    message: WORK_COMPLETE_MESSAGE,
                }
            }
            Phase::Rest => {
                self.phase = Phase::Work;
                self.remaining_secs = self.work_duration_secs;
                tracing::info!("rest break over");
                Advance::TransitionedToWork {
                    message: BREAK_OVER_MESSAGE,
                }
            }
        }
    }
}

/// Check a work duration before handing it to the clock.
pub fn check_work_minutes(minutes: u32) -> Result<u32, ValidationError> {
    check_minutes("work_minutes", minutes, &WORK_MINUTES)
}

/// Check a rest duration before handing it to the clock.
pub fn check_rest_minutes(minutes: u32) -> Result<u32, ValidationError> {
    check_minutes("rest_minutes", minutes, &REST_MINUTES)
}

pub(crate) fn check_minutes(
    field: &str,
    minutes: u32,
    range: &RangeInclusive<u32>,
) -> Result<u32, ValidationError> {
    if range.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: minutes,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn clamp_minutes(minutes: u32, range: &RangeInclusive<u32>) -> u32 {
    minutes.clamp(*range.start(), *range.end())
}
