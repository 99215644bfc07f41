//! Message presenter state

use super::ticker::{window_at, SCROLL_SEPARATOR};
use crate::decoder::{FinalMessage, MessageText};
use crate::display::{screens, Screen, LINE_LEN};

/// Default time between ticker steps
pub const SCROLL_INTERVAL_MS: u32 = 350;

/// What the presenter is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresenterState {
    /// No message
    Empty,
    /// Message fits a row and is shown as is
    Static,
    /// Message is scrolled as a ticker
    Scrolling,
}

/// Shows the latest finalized message on the screen
#[derive(Debug, Clone)]
pub struct MessagePresenter {
    interval_ms: u32,
    state: PresenterState,
    message: MessageText,
    position: usize,
    period: usize,
    last_step_ms: u32,
}

impl MessagePresenter {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            state: PresenterState::Empty,
            message: MessageText::new(),
            position: 0,
            period: 1,
            last_step_ms: 0,
        }
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// Current ticker position
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Present a new message, restarting the ticker
    pub fn show(&mut self, message: &FinalMessage, now_ms: u32, screen: &mut Screen) {
        self.message.clear();
        let _ = self.message.push_str(message.as_str());
        let len = message.char_count();
        self.position = 0;
        self.period = len + SCROLL_SEPARATOR.len();
        self.last_step_ms = now_ms;
        self.state = if len > LINE_LEN {
            PresenterState::Scrolling
        } else {
            PresenterState::Static
        };
        self.render(screen);
    }

    /// Advance the ticker if the interval has elapsed
    ///
    /// Returns whether the screen was updated.
    pub fn tick(&mut self, now_ms: u32, screen: &mut Screen) -> bool {
        if self.state != PresenterState::Scrolling {
            return false;
        }
        if now_ms.wrapping_sub(self.last_step_ms) < self.interval_ms {
            return false;
        }
        self.last_step_ms = now_ms;
        self.position = (self.position + 1) % self.period;
        self.render(screen);
        true
    }

    /// Forget the message
    pub fn clear(&mut self) {
        self.message.clear();
        self.position = 0;
        self.period = 1;
        self.state = PresenterState::Empty;
    }

    fn render(&self, screen: &mut Screen) {
        match self.state {
            PresenterState::Empty => {}
            PresenterState::Static => screens::received(screen, &self.message),
            PresenterState::Scrolling => {
                screens::received(screen, &window_at(&self.message, self.position))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_static() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        presenter.show(&FinalMessage::new("SOS"), 0, &mut screen);
        assert_eq!(presenter.state(), PresenterState::Static);
        assert_eq!(screen.line(0), Some("Received Msg:"));
        assert_eq!(screen.line(1), Some("SOS"));

        screen.mark_clean();
        assert!(!presenter.tick(10_000, &mut screen));
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_sixteen_chars_static() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        presenter.show(&FinalMessage::new("ABCDEFGHIJKLMNOP"), 0, &mut screen);
        assert_eq!(presenter.state(), PresenterState::Static);
    }

    #[test]
    fn test_long_message_scrolls_on_interval() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        presenter.show(&FinalMessage::new("HELLO FROM THE OTHER"), 1000, &mut screen);
        assert_eq!(presenter.state(), PresenterState::Scrolling);
        assert_eq!(screen.line(1), Some("HELLO FROM THE O"));

        assert!(!presenter.tick(1349, &mut screen));
        assert!(presenter.tick(1350, &mut screen));
        assert_eq!(screen.line(1), Some("ELLO FROM THE OT"));
        assert_eq!(presenter.position(), 1);
    }

    #[test]
    fn test_position_wraps() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        let message = FinalMessage::new("HELLO FROM THE OTHER");
        presenter.show(&message, 0, &mut screen);
        let period = message.char_count() + 3;
        for step in 1..=period as u32 {
            presenter.tick(step * SCROLL_INTERVAL_MS, &mut screen);
        }
        assert_eq!(presenter.position(), 0);
        assert_eq!(screen.line(1), Some("HELLO FROM THE O"));
    }

    #[test]
    fn test_new_message_restarts() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        presenter.show(&FinalMessage::new("HELLO FROM THE OTHER"), 0, &mut screen);
        presenter.tick(SCROLL_INTERVAL_MS, &mut screen);
        presenter.show(&FinalMessage::new("ANOTHER LONG MESSAGE"), 400, &mut screen);
        assert_eq!(presenter.position(), 0);
        assert_eq!(screen.line(1), Some("ANOTHER LONG MES"));
    }

    #[test]
    fn test_clear() {
        let mut presenter = MessagePresenter::new(SCROLL_INTERVAL_MS);
        let mut screen = Screen::new();
        presenter.show(&FinalMessage::new("HELLO FROM THE OTHER"), 0, &mut screen);
        presenter.clear();
        assert_eq!(presenter.state(), PresenterState::Empty);
        assert!(presenter.message().is_empty());
        assert!(!presenter.tick(5000, &mut screen));
    }
}
