//! HD44780 character LCD driver
//!
//! 16x2 module wired in 4-bit parallel mode: RS, E and D4..D7. The R/W
//! line is tied low, so busy-flag polling is replaced by fixed delays.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lumen_core::display::display_char;
use lumen_core::traits::{CharDisplay, DisplayError};

/// Display columns
pub const COLS: u8 = 16;

/// Display rows
pub const ROWS: u8 = 2;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const TWO_LINES: u8 = 0x08;
}

/// HD44780 driver over GPIO outputs
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a new driver; call `init` before use
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
        }
    }

    /// Run the 4-bit initialization sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on settle time
        self.delay.delay_ms(50);
        pin(self.rs.set_low())?;
        pin(self.en.set_low())?;

        // Three 8-bit function sets, then switch to 4-bit
        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)
    }

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        pin(self.rs.set_low())?;
        self.write_byte(byte)
    }

    fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        pin(self.rs.set_high())?;
        self.write_byte(byte)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        for (bit, line) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin(line.set_high())?;
            } else {
                pin(line.set_low())?;
            }
        }
        self.pulse_enable()
    }

    /// Latch the data lines on the falling edge of E
    fn pulse_enable(&mut self) -> Result<(), DisplayError> {
        pin(self.en.set_high())?;
        self.delay.delay_us(1);
        pin(self.en.set_low())?;
        // Most commands need > 37 us
        self.delay.delay_us(100);
        Ok(())
    }
}

fn pin<E>(result: Result<(), E>) -> Result<(), DisplayError> {
    result.map_err(|_| DisplayError::Bus)
}

impl<P, D> CharDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col >= COLS || row >= ROWS {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for ch in text.chars() {
            self.write_data(display_char(ch) as u8)?;
        }
        Ok(())
    }
}
