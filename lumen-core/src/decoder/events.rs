//! Decoder output events

use crate::morse::Symbol;
use heapless::Vec;

/// Upper bound on events produced by a single sample
pub const MAX_EVENTS_PER_SAMPLE: usize = 4;

/// Events collected from one `PulseDecoder::update` call
pub type DecoderEvents = Vec<DecoderEvent, MAX_EVENTS_PER_SAMPLE>;

/// Something the decoder recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderEvent {
    /// A pulse was classified
    Symbol(Symbol),
    /// A pulse too short to be a symbol was ignored
    Noise { duration_ms: u32 },
    /// A letter was completed and appended to the text
    Letter(char),
    /// A word boundary was appended to the text
    WordBreak,
    /// The inactivity timeout finalized a message
    MessageReady,
}
