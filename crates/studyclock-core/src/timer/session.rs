//! A clock and a blinker sharing one tick source.

use super::blinker::{Blink, NotificationBlinker};
use super::clock::{Advance, SessionClock};
use crate::events::Event;
use crate::title::TitleSlot;

/// Result of one shared tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTick {
    pub advance: Advance,
    pub blink: Blink,
}

/// Composes a [`SessionClock`] with a [`NotificationBlinker`].
///
/// Each `tick()` runs the blinker first, then the clock; a transition hands
/// its message to the blinker, so the first flip lands one tick later.
#[derive(Debug)]
pub struct StudySession<S: TitleSlot> {
    clock: SessionClock,
    blinker: NotificationBlinker<S>,
    notifications: bool,
}

impl<S: TitleSlot> StudySession<S> {
    pub fn new(clock: SessionClock, slot: S) -> Self {
        Self {
            clock,
            blinker: NotificationBlinker::new(slot),
            notifications: true,
        }
    }

    /// Enable or disable title notifications on transitions.
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications = enabled;
        self
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SessionClock {
        &mut self.clock
    }

    pub fn blinker(&self) -> &NotificationBlinker<S> {
        &self.blinker
    }

    pub fn blinker_mut(&mut self) -> &mut NotificationBlinker<S> {
        &mut self.blinker
    }

    pub fn tick(&mut self) -> SessionTick {
        let blink = self.blinker.tick();
        let advance = self.clock.advance();
        if let Some(message) = advance.message() {
            if self.notifications {
                self.blinker.start(message);
            }
        }
        SessionTick { advance, blink }
    }

    /// Describe a transition from the last tick, if there was one.
    pub fn transition_event(&self, advance: Advance) -> Option<Event> {
        Event::phase_completed(advance, &self.clock)
    }

    /// Stop any notification and return the title slot.
    pub fn shutdown(self) -> S {
        self.blinker.into_slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::clock::{Phase, WORK_COMPLETE_MESSAGE};
    use crate::title::{MemoryTitle, DEFAULT_TITLE};

    fn session() -> StudySession<MemoryTitle> {
        StudySession::new(SessionClock::with_minutes(1, 1), MemoryTitle::default())
    }

    #[test]
    fn transition_starts_blinker() {
        let mut s = session();
        s.clock_mut().start();
        for _ in 0..60 {
            assert_eq!(s.tick().advance, Advance::Ticked);
        }
        let t = s.tick();
        assert!(t.advance.is_transition());
        assert_eq!(t.blink, Blink::Idle);
        assert!(s.blinker().is_active());
        assert_eq!(s.blinker().message(), WORK_COMPLETE_MESSAGE);
        assert_eq!(s.clock().phase(), Phase::Rest);

        assert_eq!(s.tick().blink, Blink::Message);
        assert_eq!(s.blinker().slot().displayed(), WORK_COMPLETE_MESSAGE);
    }

    #[test]
    fn blinker_runs_while_clock_paused() {
        let mut s = session();
        s.clock_mut().start();
        for _ in 0..61 {
            s.tick();
        }
        let blinks: Vec<Blink> = (0..11).map(|_| s.tick().blink).collect();
        assert_eq!(blinks[9], Blink::Finished);
        assert_eq!(blinks[10], Blink::Idle);
        assert_eq!(s.clock().remaining_secs(), 60);
        assert_eq!(s.blinker().slot().displayed(), DEFAULT_TITLE);
    }

    #[test]
    fn disabled_notifications_leave_title_alone() {
        let mut s = session().with_notifications(false);
        s.clock_mut().start();
        for _ in 0..61 {
            s.tick();
        }
        assert_eq!(s.clock().completed_sessions(), 1);
        assert!(!s.blinker().is_active());
        assert!(s.blinker().slot().history().is_empty());
    }

    #[test]
    fn transition_event_reports_totals() {
        let mut s = session();
        s.clock_mut().start();
        let mut last = Advance::NoOp;
        for _ in 0..61 {
            last = s.tick().advance;
        }
        match s.transition_event(last) {
            Some(Event::PhaseCompleted {
                from,
                to,
                completed_sessions,
                total_study_secs,
                ..
            }) => {
                assert_eq!(from, Phase::Work);
                assert_eq!(to, Phase::Rest);
                assert_eq!(completed_sessions, 1);
                assert_eq!(total_study_secs, 60);
            }
            other => panic!("Expected PhaseCompleted, got {other:?}"),
        }
        assert!(s.transition_event(Advance::Ticked).is_none());
    }

    #[test]
    fn shutdown_restores_title() {
        let mut s = session();
        s.clock_mut().start();
        for _ in 0..62 {
            s.tick();
        }
        assert_eq!(s.blinker().slot().displayed(), WORK_COMPLETE_MESSAGE);
        let slot = s.shutdown();
        assert!(slot.is_original());
    }
}
