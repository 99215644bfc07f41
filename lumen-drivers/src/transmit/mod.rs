//! Async Morse transmitter
//!
//! Walks the emission schedule of a message, switching the emitter and
//! awaiting a delay for each pulse. The executor is free to run other
//! tasks while a pulse is held.

use embedded_hal_async::delay::DelayNs;
use lumen_core::morse::{Emission, Emissions, Timing};
use lumen_core::traits::{Emitter, EmitterError, TransmitProgress};

/// Sends text as timed light pulses
pub struct Transmitter<E, D> {
    emitter: E,
    delay: D,
    timing: Timing,
}

impl<E, D> Transmitter<E, D>
where
    E: Emitter,
    D: DelayNs,
{
    pub fn new(emitter: E, delay: D, timing: Timing) -> Self {
        Self {
            emitter,
            delay,
            timing,
        }
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Transmit `message`, returning the number of characters walked
    ///
    /// The emitter is switched off afterwards, also when a pin error ends
    /// the transmission early. `progress` sees every character and, on
    /// success, the final summary.
    pub async fn transmit<P>(
        &mut self,
        message: &str,
        progress: &mut P,
    ) -> Result<usize, EmitterError>
    where
        P: TransmitProgress,
    {
        let result = self.run(message, progress).await;
        let off = self.emitter.off();
        let sent = result?;
        off?;
        progress.finished(message, sent);
        Ok(sent)
    }

    async fn run<P>(&mut self, message: &str, progress: &mut P) -> Result<usize, EmitterError>
    where
        P: TransmitProgress,
    {
        let mut sent = 0;
        for emission in Emissions::new(message, self.timing) {
            match emission {
                Emission::Char { index, ch } => {
                    progress.char_sent(index, ch);
                    sent = index + 1;
                }
                Emission::Pulse(pulse) => {
                    self.emitter.set_on(pulse.level.is_on())?;
                    self.delay.delay_ms(pulse.duration_ms).await;
                }
            }
        }
        Ok(sent)
    }
}
