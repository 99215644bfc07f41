//! Ticker windows over a looped message

use heapless::String;

use crate::display::LINE_LEN;

/// Inserted between repetitions of a scrolling message
pub const SCROLL_SEPARATOR: &str = "   ";

/// One row's worth of ticker text
pub type Window = String<LINE_LEN>;

/// Window of the looped `message + SCROLL_SEPARATOR` starting at `position`
pub fn window_at(message: &str, position: usize) -> Window {
    let mut window = Window::new();
    let looped = message.chars().chain(SCROLL_SEPARATOR.chars()).cycle();
    for ch in looped.skip(position).take(LINE_LEN) {
        let _ = window.push(ch);
    }
    window
}

/// Endless sequence of ticker windows, one step per item
#[derive(Debug, Clone)]
pub struct Ticker<'a> {
    message: &'a str,
    position: usize,
    period: usize,
}

impl<'a> Ticker<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            position: 0,
            period: message.chars().count() + SCROLL_SEPARATOR.len(),
        }
    }

    /// Position of the next window
    pub fn position(&self) -> usize {
        self.position
    }

    /// Steps before the windows repeat
    pub fn period(&self) -> usize {
        self.period
    }
}

impl Iterator for Ticker<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let window = window_at(self.message, self.position);
        self.position = (self.position + 1) % self.period;
        Some(window)
    }
}
