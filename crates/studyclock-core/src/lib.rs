//! # Studyclock Core Library
//!
//! This library provides the core logic for the Studyclock interval timer.
//! All operations are available to any host (the bundled CLI, a test
//! harness, a GUI) that forwards one tick per second.
//!
//! ## Architecture
//!
//! - **Session Clock**: A tick-driven work/rest state machine that requires the
//!   caller to invoke `advance()` once per elapsed second
//! - **Notification Blinker**: A bounded title alternation started on every
//!   phase transition
//! - **Storage**: TOML-based configuration (statistics live in memory only)
//!
//! ## Key Components
//!
//! - [`SessionClock`]: Countdown, phase and study statistics
//! - [`NotificationBlinker`]: Transient title notification
//! - [`StudySession`]: Both of the above behind a single tick
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;
pub mod title;

pub use error::{ConfigError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    format_clock, format_study, Advance, Blink, NotificationBlinker, Phase, SessionClock,
    StudySession,
};
pub use title::{MemoryTitle, TitleSlot, DEFAULT_TITLE};
