//! Decoded text storage

use heapless::String;

/// Capacity of decoded text in characters
pub const MAX_MESSAGE_LEN: usize = 128;

pub type MessageText = String<MAX_MESSAGE_LEN>;

/// Text accumulated for the message being received
///
/// Characters past capacity are dropped and counted. Word boundaries are
/// never leading and never doubled.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: MessageText,
    dropped: u16,
}

impl TextBuffer {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            dropped: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a decoded letter
    pub fn push(&mut self, ch: char) {
        if self.text.push(ch).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// Append a word boundary, returning whether one was added
    pub fn push_word_break(&mut self) -> bool {
        if self.text.is_empty() || self.text.ends_with(' ') {
            return false;
        }
        if self.text.push(' ').is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        true
    }

    /// Move the text out as a finished message, leaving the buffer empty
    pub fn take_message(&mut self) -> FinalMessage {
        let mut text = core::mem::take(&mut self.text);
        let trimmed = text.trim_end().len();
        text.truncate(trimmed);
        let message = FinalMessage {
            text,
            dropped: self.dropped,
        };
        self.dropped = 0;
        message
    }
}

/// A completed message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalMessage {
    text: MessageText,
    dropped: u16,
}

impl FinalMessage {
    /// Build a message from text, truncating at capacity
    pub fn new(text: &str) -> Self {
        let mut message = Self::default();
        for ch in text.chars() {
            if message.text.push(ch).is_err() {
                message.dropped = message.dropped.saturating_add(1);
            }
        }
        message
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters lost to the capacity limit
    pub fn dropped(&self) -> u16 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_word_breaks_not_leading_or_doubled() {
        let mut buf = TextBuffer::new();
        assert!(!buf.push_word_break());
        buf.push('A');
        assert!(buf.push_word_break());
        assert!(!buf.push_word_break());
        buf.push('B');
        assert_eq!(buf.as_str(), "A B");
    }

    #[test]
    fn test_take_message_trims_trailing_space() {
        let mut buf = TextBuffer::new();
        buf.push('H');
        buf.push('I');
        buf.push_word_break();
        let message = buf.take_message();
        assert_eq!(message.as_str(), "HI");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overflow_counted() {
        let mut buf = TextBuffer::new();
        for _ in 0..MAX_MESSAGE_LEN + 5 {
            buf.push('E');
        }
        let message = buf.take_message();
        assert_eq!(message.char_count(), MAX_MESSAGE_LEN);
        assert_eq!(message.dropped(), 5);
    }

    #[test]
    fn test_final_message_new_truncates() {
        let long = "X".repeat(MAX_MESSAGE_LEN + 1);
        let message = FinalMessage::new(&long);
        assert_eq!(message.char_count(), MAX_MESSAGE_LEN);
        assert_eq!(message.dropped(), 1);
    }
}
