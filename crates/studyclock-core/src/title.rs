//! The externally observed "displayed title" slot.
//!
//! A host owns exactly one title surface (window title, terminal title,
//! status bar) and lends it to a [`NotificationBlinker`](crate::timer::NotificationBlinker),
//! which is then its only writer.

pub const DEFAULT_TITLE: &str = "Pomodoro Timer";

/// A single process-wide title surface.
pub trait TitleSlot {
    /// Show `text` in place of the original title.
    fn set_displayed(&mut self, text: &str);

    /// Put the original title back.
    fn restore_original(&mut self);
}

/// In-memory title slot that records every write.
#[derive(Debug, Clone)]
pub struct MemoryTitle {
    original: String,
    displayed: String,
    history: Vec<String>,
}

impl MemoryTitle {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            displayed: original.clone(),
            original,
            history: Vec::new(),
        }
    }

    /// What the slot currently shows.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Every value written to the slot, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_original(&self) -> bool {
        self.displayed == self.original
    }
}

impl Default for MemoryTitle {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl TitleSlot for MemoryTitle {
    fn set_displayed(&mut self, text: &str) {
        self.displayed = text.to_string();
        self.history.push(self.displayed.clone());
    }

    fn restore_original(&mut self) {
        self.displayed = self.original.clone();
        self.history.push(self.displayed.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_title_records_writes() {
        let mut title = MemoryTitle::default();
        assert_eq!(title.displayed(), DEFAULT_TITLE);
        title.set_displayed("hello");
        assert_eq!(title.displayed(), "hello");
        assert!(!title.is_original());
        title.restore_original();
        assert!(title.is_original());
        assert_eq!(title.history(), ["hello", DEFAULT_TITLE]);
    }
}
