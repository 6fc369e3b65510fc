//! Terminal window title as the notification surface.

use std::io::Write;

use studyclock_core::TitleSlot;

/// Writes the title with the OSC 0 escape sequence on stdout.
pub struct TerminalTitle {
    original: String,
}

impl TerminalTitle {
    /// Takes over the terminal title, showing `original` right away.
    pub fn new(original: impl Into<String>) -> Self {
        let mut title = Self {
            original: original.into(),
        };
        title.restore_original();
        title
    }

    fn write(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = write!(out, "\x1b]0;{text}\x07").and_then(|_| out.flush()) {
            tracing::warn!("failed to set terminal title: {e}");
        }
    }
}

impl TitleSlot for TerminalTitle {
    fn set_displayed(&mut self, text: &str) {
        self.write(text);
    }

    fn restore_original(&mut self) {
        self.write(&self.original);
    }
}
