//! Light pulse decoder
//!
//! Turns a sampled binary light level into text: edges delimit pulses and
//! gaps, durations are classified into symbols and boundaries, and a
//! period of inactivity finalizes the message.

mod events;
mod machine;
mod message;

pub use events::{DecoderEvent, DecoderEvents, MAX_EVENTS_PER_SAMPLE};
pub use machine::{DecoderState, PulseDecoder};
pub use message::{FinalMessage, MessageText, TextBuffer, MAX_MESSAGE_LEN};
