//! Long-press detection for the mode button

/// Default hold time before a press toggles the mode
pub const HOLD_TIME_MS: u32 = 2000;

/// Turns a sampled "button held" level into one edge per long hold
#[derive(Debug, Clone)]
pub struct LongPress {
    hold_ms: u32,
    pressed_since: Option<u32>,
    fired: bool,
}

impl LongPress {
    pub fn new(hold_ms: u32) -> Self {
        Self {
            hold_ms,
            pressed_since: None,
            fired: false,
        }
    }

    /// Feed one sample; returns `true` exactly once per hold reaching the hold time
    pub fn update(&mut self, now_ms: u32, pressed: bool) -> bool {
        if !pressed {
            self.pressed_since = None;
            self.fired = false;
            return false;
        }
        let since = *self.pressed_since.get_or_insert(now_ms);
        if !self.fired && now_ms.wrapping_sub(since) >= self.hold_ms {
            self.fired = true;
            return true;
        }
        false
    }

    /// Whether the button is currently held
    pub fn is_held(&self) -> bool {
        self.pressed_since.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_hold() {
        let mut button = LongPress::new(HOLD_TIME_MS);
        let fired = (0..=5000).filter(|&t| button.update(t, true)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_fires_at_hold_time() {
        let mut button = LongPress::new(HOLD_TIME_MS);
        assert!(!button.update(100, true));
        assert!(!button.update(2099, true));
        assert!(button.update(2100, true));
    }

    #[test]
    fn test_short_press_ignored() {
        let mut button = LongPress::new(HOLD_TIME_MS);
        assert!(!button.update(0, true));
        assert!(!button.update(1999, true));
        assert!(!button.update(2000, false));
        assert!(!button.update(2500, true));
        assert!(!button.update(4499, true));
        assert!(button.is_held());
    }

    #[test]
    fn test_rearms_after_release() {
        let mut button = LongPress::new(HOLD_TIME_MS);
        button.update(0, true);
        assert!(button.update(2000, true));
        button.update(2100, false);
        button.update(3000, true);
        assert!(button.update(5000, true));
    }
}
