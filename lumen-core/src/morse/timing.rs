//! Link timing
//!
//! Durations are milliseconds. The transmitter emits exact durations; the
//! decoder classifies measured durations against midpoints between the
//! nominal values so that sampling jitter on either side is tolerated.

use super::symbol::Symbol;

/// Dot on-duration
pub const DOT_DURATION_MS: u32 = 150;
/// Dash on-duration
pub const DASH_DURATION_MS: u32 = 450;
/// Off-duration between letters
pub const LETTER_PAUSE_MS: u32 = 450;
/// Extra off-duration added after a letter pause for a word gap
pub const WORD_PAUSE_MS: u32 = 1050;
/// Inactivity after which a message is finalized
pub const TIMEOUT_PAUSE_MS: u32 = 2500;

/// Timing parameters shared by transmitter and decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub dot_ms: u32,
    pub dash_ms: u32,
    pub letter_pause_ms: u32,
    pub word_pause_ms: u32,
    pub timeout_ms: u32,
}

/// How a completed on-pulse is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseClass {
    /// Shorter than half a dot
    Noise,
    Symbol(Symbol),
}

/// How a completed off-gap is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GapClass {
    /// Between symbols of one letter
    IntraLetter,
    /// Ends the current letter
    Letter,
    /// Ends the current letter and word
    Word,
}

/// Inconsistent timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Dot duration is zero
    ZeroDot,
    /// Dash must be longer than a dot
    DashTooShort,
    /// Letter pause must be at least a dot
    LetterPauseTooShort,
    /// Word pause must exceed the letter pause
    WordPauseTooShort,
    /// Timeout must exceed a full word gap
    TimeoutTooShort,
}

impl Default for Timing {
    fn default() -> Self {
        Self::standard()
    }
}

impl Timing {
    /// The link's nominal timing
    pub const fn standard() -> Self {
        Self {
            dot_ms: DOT_DURATION_MS,
            dash_ms: DASH_DURATION_MS,
            letter_pause_ms: LETTER_PAUSE_MS,
            word_pause_ms: WORD_PAUSE_MS,
            timeout_ms: TIMEOUT_PAUSE_MS,
        }
    }

    /// Pulses shorter than this are noise
    pub const fn noise_floor_ms(&self) -> u32 {
        self.dot_ms / 2
    }

    /// Pulses at or above this are dashes
    pub const fn dash_threshold_ms(&self) -> u32 {
        (self.dot_ms + self.dash_ms) / 2
    }

    /// Gaps at or above this end a letter
    pub const fn letter_gap_threshold_ms(&self) -> u32 {
        (self.dot_ms + self.letter_pause_ms) / 2
    }

    /// Off-time emitted between the symbols of one letter
    pub const fn intra_gap_ms(&self) -> u32 {
        self.dot_ms
    }

    /// Off-time emitted for a word separator
    pub const fn word_gap_ms(&self) -> u32 {
        self.word_pause_ms
    }

    pub fn classify_pulse(&self, duration_ms: u32) -> PulseClass {
        if duration_ms < self.noise_floor_ms() {
            PulseClass::Noise
        } else if duration_ms < self.dash_threshold_ms() {
            PulseClass::Symbol(Symbol::Dot)
        } else {
            PulseClass::Symbol(Symbol::Dash)
        }
    }

    pub fn classify_gap(&self, duration_ms: u32) -> GapClass {
        if duration_ms > self.word_pause_ms {
            GapClass::Word
        } else if duration_ms >= self.letter_gap_threshold_ms() {
            GapClass::Letter
        } else {
            GapClass::IntraLetter
        }
    }

    /// Check that emitted durations classify back to what was sent
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.dot_ms == 0 {
            return Err(TimingError::ZeroDot);
        }
        if self.dash_ms <= self.dot_ms {
            return Err(TimingError::DashTooShort);
        }
        if self.letter_pause_ms <= self.dot_ms {
            return Err(TimingError::LetterPauseTooShort);
        }
        if self.word_pause_ms <= self.letter_pause_ms {
            return Err(TimingError::WordPauseTooShort);
        }
        if self.timeout_ms <= self.letter_pause_ms + self.word_pause_ms {
            return Err(TimingError::TimeoutTooShort);
        }
        Ok(())
    }
}
