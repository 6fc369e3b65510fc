//! Transient title notification.
//!
//! After a phase transition the displayed title alternates between a message
//! and the original title, once per tick, for a fixed window. It is driven by
//! the same tick source as the clock but knows nothing about it.

use crate::title::TitleSlot;

/// Length of the alternation window, in ticks.
pub const BLINK_WINDOW_TICKS: u32 = 10;

/// What a single blinker tick did to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blink {
    /// Nothing in flight.
    Idle,
    /// The message is now displayed.
    Message,
    /// The original title is now displayed.
    Original,
    /// Window closed; original title restored and blinker deactivated.
    Finished,
}

/// Self-terminating title alternation, owning writes to a [`TitleSlot`].
#[derive(Debug)]
pub struct NotificationBlinker<S: TitleSlot> {
    slot: S,
    message: String,
    showing_message: bool,
    ticks_elapsed: u32,
    active: bool,
}

impl<S: TitleSlot> NotificationBlinker<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            message: String::new(),
            showing_message: false,
            ticks_elapsed: 0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn ticks_elapsed(&self) -> u32 {
        self.ticks_elapsed
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Begin announcing `message`, superseding anything in flight.
    ///
    /// The title is untouched until the next tick.
    pub fn start(&mut self, message: impl Into<String>) {
        self.cancel();
        self.message = message.into();
        self.showing_message = false;
        self.ticks_elapsed = 0;
        self.active = true;
        tracing::debug!(message = %self.message, "title blink started");
    }

    /// Restore the original title now and deactivate.
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.slot.restore_original();
        self.active = false;
        self.showing_message = false;
        tracing::debug!(ticks = self.ticks_elapsed, "title blink cancelled");
    }

    pub fn tick(&mut self) -> Blink {
        if !self.active {
            return Blink::Idle;
        }

        self.ticks_elapsed += 1;
        self.showing_message = !self.showing_message;
        let finished = self.ticks_elapsed >= BLINK_WINDOW_TICKS;

        // Exactly one write per tick; the last one always lands on the original.
        if self.showing_message && !finished {
            self.slot.set_displayed(&self.message);
        } else {
            self.slot.restore_original();
        }

        if finished {
            self.active = false;
            self.showing_message = false;
            return Blink::Finished;
        }

        if self.showing_message {
            Blink::Message
        } else {
            Blink::Original
        }
    }

    /// Cancel any blink and give the slot back to the host.
    pub fn into_slot(mut self) -> S {
        self.cancel();
        self.slot
    }
}
