mod blinker;
mod clock;
mod format;
mod session;

pub use blinker::{Blink, NotificationBlinker, BLINK_WINDOW_TICKS};
pub use clock::{
    check_rest_minutes, check_work_minutes, Advance, Phase, SessionClock, BREAK_OVER_MESSAGE,
    DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES, REST_MINUTES, WORK_COMPLETE_MESSAGE,
    WORK_MINUTES,
};
pub(crate) use clock::check_minutes;
pub use format::{format_clock, format_study};
pub use session::{SessionTick, StudySession};
