//! Character display trait

/// Errors that can occur driving a character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A control or data pin could not be driven
    Bus,
    /// Cursor position outside the display
    OutOfBounds,
}

/// Trait for text-mode character displays
///
/// Positions are zero-based. Text is ASCII; characters past the end of a
/// row are the driver's concern.
pub trait CharDisplay {
    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;
}
