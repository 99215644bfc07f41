//! Light emitter and transmission progress traits

/// Errors that can occur switching the emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmitterError {
    /// The output pin could not be driven
    Pin,
}

/// Trait for the transmitting light source
pub trait Emitter {
    /// Switch the light on or off
    fn set_on(&mut self, on: bool) -> Result<(), EmitterError>;

    /// Last commanded state
    fn is_on(&self) -> bool;

    fn off(&mut self) -> Result<(), EmitterError> {
        self.set_on(false)
    }
}

/// Receives progress while a message is transmitted
pub trait TransmitProgress {
    /// Character `index` is about to be sent
    fn char_sent(&mut self, index: usize, ch: char);

    /// Transmission of `message` finished after `sent` characters
    fn finished(&mut self, message: &str, sent: usize);
}
