//! Character display glue
//!
//! Pushes the controller's screen buffer to the HD44780 and mirrors
//! transmit progress on it.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use lumen_core::display::Screen;
use lumen_core::mode::ModeController;
use lumen_core::traits::{CharDisplay, TransmitProgress};
use lumen_drivers::display::Hd44780;

/// The 16x2 display in 4-bit mode
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Render the screen if it changed
///
/// On a bus error the screen stays dirty and is retried on the next call.
pub fn flush<D: CharDisplay>(screen: &mut Screen, display: &mut D) {
    if let Err(e) = screen.render(display) {
        warn!("Display update failed: {:?}", e);
    }
}

/// Transmit progress that updates the display after every character
pub struct LcdProgress<'a, D> {
    pub controller: &'a mut ModeController,
    pub display: &'a mut D,
}

impl<D: CharDisplay> TransmitProgress for LcdProgress<'_, D> {
    fn char_sent(&mut self, index: usize, ch: char) {
        trace!("TX [{}] '{}'", index, ch);
        self.controller.char_sent(index, ch);
        flush(self.controller.screen_mut(), self.display);
    }

    fn finished(&mut self, message: &str, sent: usize) {
        self.controller.finished(message, sent);
        flush(self.controller.screen_mut(), self.display);
    }
}
