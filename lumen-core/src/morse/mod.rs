//! Morse alphabet, timing rules and emission schedule
//!
//! The table maps characters to packed symbol sequences in both
//! directions with constant-time lookups. Timing constants are shared by
//! the transmitter and the decoder so that two devices built from this
//! crate interoperate.

pub mod pulse;
pub mod schedule;
pub mod symbol;
pub mod table;
pub mod timing;

pub use pulse::{Level, Pulse};
pub use schedule::{char_pulses, schedule_duration_ms, Emission, Emissions, MAX_PULSES_PER_CHAR};
pub use symbol::{CodeOverflow, MorseCode, Symbol, MAX_SYMBOLS};
pub use table::{decode, encode, Encoding, MorseTable, TableError, ENTRIES, TABLE, UNKNOWN, WORD_SEPARATOR};
pub use timing::{GapClass, PulseClass, Timing, TimingError};
