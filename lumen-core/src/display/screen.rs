//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

use crate::traits::{CharDisplay, DisplayError};

/// Number of character rows on the display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the display
pub const SCREEN_COLS: usize = 16;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Character actually drawn for `ch`
///
/// The display only has printable ASCII glyphs; everything else shows as
/// `?`. Rows therefore hold one byte per column.
pub fn display_char(ch: char) -> char {
    if ch.is_ascii() && !ch.is_ascii_control() {
        ch
    } else {
        '?'
    }
}

/// Screen buffer for text-mode displays
///
/// Lines are truncated at `LINE_LEN` characters and padded with spaces on
/// render, so stale characters from a longer previous line never remain.
/// Characters without a glyph are stored as `?`.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Set the content of a specific row
    ///
    /// Writing identical content leaves the screen clean.
    pub fn set_line(&mut self, row: usize, text: &str) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let mut next: String<LINE_LEN> = String::new();
        for ch in text.chars().take(LINE_LEN) {
            let _ = next.push(display_char(ch));
        }
        if *line == next {
            return;
        }
        *line = next;
        self.dirty = true;
    }

    /// Set both rows
    pub fn set(&mut self, top: &str, bottom: &str) {
        self.set_line(0, top);
        self.set_line(1, bottom);
    }

    /// Get the content of a specific row
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Draw every row to `display` if anything changed
    pub fn render<D: CharDisplay>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        if !self.dirty {
            return Ok(());
        }
        for (row, line) in self.lines.iter().enumerate() {
            let mut padded: String<LINE_LEN> = String::new();
            let _ = padded.push_str(line);
            while padded.push(' ').is_ok() {}
            display.set_cursor(0, row as u8)?;
            display.print(&padded)?;
        }
        self.dirty = false;
        Ok(())
    }
}

impl core::fmt::Debug for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.lines.iter().map(|l| l.as_str())).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    extern crate std;
    use super::*;
    use std::string::String as StdString;
    use std::vec::Vec;

    /// Records display calls into a 16x2 grid
    #[derive(Default)]
    pub(crate) struct MockDisplay {
        pub rows: [StdString; SCREEN_ROWS],
        pub cursor: (u8, u8),
        pub prints: Vec<StdString>,
    }

    impl CharDisplay for MockDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.rows = Default::default();
            Ok(())
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
            if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
                return Err(DisplayError::OutOfBounds);
            }
            self.cursor = (col, row);
            Ok(())
        }

        fn print(&mut self, text: &str) -> Result<(), DisplayError> {
            let row = &mut self.rows[self.cursor.1 as usize];
            row.truncate(self.cursor.0 as usize);
            row.push_str(text);
            self.prints.push(text.into());
            Ok(())
        }
    }

    #[test]
    fn test_set_line_truncates() {
        let mut screen = Screen::new();
        screen.set_line(0, "Transmitting via LED");
        assert_eq!(screen.line(0), Some("Transmitting via"));
    }

    #[test]
    fn test_set_line_counts_characters_not_bytes() {
        let mut screen = Screen::new();
        screen.set_line(1, "Grüße aus Köln, Señor");
        assert_eq!(screen.line(1), Some("Gr??e aus K?ln, "));
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut screen = Screen::new();
        screen.mark_clean();
        screen.set_line(2, "nope");
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_identical_content_stays_clean() {
        let mut screen = Screen::new();
        screen.set("Mode: SEND", "Ready for data");
        screen.mark_clean();
        screen.set("Mode: SEND", "Ready for data");
        assert!(!screen.is_dirty());
        screen.set_line(1, "BT Ready!");
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_render_pads_rows() {
        let mut screen = Screen::new();
        let mut display = MockDisplay::default();
        screen.set("Received Msg:", "HI");
        screen.render(&mut display).unwrap();
        assert_eq!(display.rows[0], "Received Msg:   ");
        assert_eq!(display.rows[1], "HI              ");
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_render_skips_when_clean() {
        let mut screen = Screen::new();
        let mut display = MockDisplay::default();
        screen.render(&mut display).unwrap();
        let calls = display.prints.len();
        screen.render(&mut display).unwrap();
        assert_eq!(display.prints.len(), calls);
    }
}
