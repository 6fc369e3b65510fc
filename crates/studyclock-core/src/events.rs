use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Advance, Phase, SessionClock};

/// Every state change of the clock produces an Event.
/// Hosts print or log them; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ClockStarted {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    ClockPaused {
        phase: Phase,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    ClockReset {
        work_duration_secs: u32,
        at: DateTime<Utc>,
    },
    DurationChanged {
        phase: Phase,
        duration_secs: u32,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A countdown hit zero and the clock flipped phase (and paused).
    PhaseCompleted {
        from: Phase,
        to: Phase,
        message: String,
        total_study_secs: u64,
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        running: bool,
        remaining_secs: u32,
        clock: String,
        work_duration_secs: u32,
        rest_duration_secs: u32,
        total_study_secs: u64,
        study_time: String,
        completed_sessions: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Build a `PhaseCompleted` event from an advance result and the clock
    /// state right after it. Non-transitions yield `None`.
    pub fn phase_completed(advance: Advance, clock: &SessionClock) -> Option<Self> {
        let message = advance.message()?;
        let to = clock.phase();
        Some(Event::PhaseCompleted {
            from: to.next(),
            to,
            message: message.to_string(),
            total_study_secs: clock.total_study_secs(),
            completed_sessions: clock.completed_sessions(),
            at: Utc::now(),
        })
    }
}
