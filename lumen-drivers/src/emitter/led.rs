//! GPIO LED emitter
//!
//! Drives the transmitting LED directly from a GPIO pin.

use embedded_hal::digital::OutputPin;
use lumen_core::traits::{Emitter, EmitterError};

/// LED emitter on a GPIO output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct LedEmitter<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> LedEmitter<P> {
    /// Create a new LED emitter, switched off
    ///
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, EmitterError> {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false)?;
        Ok(led)
    }

    pub fn new_active_high(pin: P) -> Result<Self, EmitterError> {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Result<Self, EmitterError> {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Emitter for LedEmitter<P> {
    fn set_on(&mut self, on: bool) -> Result<(), EmitterError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| EmitterError::Pin)?;
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
