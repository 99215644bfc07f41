//! Emission schedule for a text message
//!
//! `Emissions` walks a message and yields, per character, a progress
//! marker followed by the on/off pulses that encode it:
//!
//! - each symbol is an on-pulse followed by an intra-letter gap
//! - a letter pause closes every mapped character
//! - a space is a single word gap; runs of spaces collapse into one
//! - characters outside the table emit nothing

use heapless::Vec;

use super::pulse::Pulse;
use super::symbol::{Symbol, MAX_SYMBOLS};
use super::table::{encode, Encoding};
use super::timing::Timing;

/// Upper bound on pulses produced by one character
pub const MAX_PULSES_PER_CHAR: usize = MAX_SYMBOLS * 2 + 1;

/// One step of a transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Emission {
    /// Character `index` of the message is about to be sent
    Char { index: usize, ch: char },
    Pulse(Pulse),
}

/// Pulses for a single character
///
/// Every symbol is followed by a one-dot gap; the letter is closed by the
/// remainder of the letter pause.
pub fn char_pulses(timing: &Timing, ch: char) -> Vec<Pulse, MAX_PULSES_PER_CHAR> {
    let mut pulses = Vec::new();
    match encode(ch) {
        Encoding::WordSeparator => {
            let _ = pulses.push(Pulse::off(timing.word_gap_ms()));
        }
        Encoding::Code(code) if code.is_empty() => {}
        Encoding::Code(code) => {
            for symbol in code.symbols() {
                let on = match symbol {
                    Symbol::Dot => timing.dot_ms,
                    Symbol::Dash => timing.dash_ms,
                };
                let _ = pulses.push(Pulse::on(on));
                let _ = pulses.push(Pulse::off(timing.intra_gap_ms()));
            }
            let rest = timing.letter_pause_ms.saturating_sub(timing.intra_gap_ms());
            if rest > 0 {
                let _ = pulses.push(Pulse::off(rest));
            }
        }
    }
    pulses
}

/// Iterator over the emission schedule of a message
#[derive(Debug, Clone)]
pub struct Emissions<'a> {
    chars: core::str::Chars<'a>,
    timing: Timing,
    index: usize,
    pending: Vec<Pulse, MAX_PULSES_PER_CHAR>,
    cursor: usize,
    after_word_gap: bool,
}

impl<'a> Emissions<'a> {
    pub fn new(message: &'a str, timing: Timing) -> Self {
        Self {
            chars: message.chars(),
            timing,
            index: 0,
            pending: Vec::new(),
            cursor: 0,
            after_word_gap: false,
        }
    }
}

impl Iterator for Emissions<'_> {
    type Item = Emission;

    fn next(&mut self) -> Option<Emission> {
        if let Some(pulse) = self.pending.get(self.cursor) {
            self.cursor += 1;
            return Some(Emission::Pulse(*pulse));
        }

        let ch = self.chars.next()?;
        let index = self.index;
        self.index += 1;
        self.cursor = 0;

        let is_separator = matches!(encode(ch), Encoding::WordSeparator);
        self.pending = if is_separator && self.after_word_gap {
            Vec::new()
        } else {
            char_pulses(&self.timing, ch)
        };
        if is_separator {
            self.after_word_gap = true;
        } else if !self.pending.is_empty() {
            self.after_word_gap = false;
        }

        Some(Emission::Char { index, ch })
    }
}

/// Total time the schedule for `message` takes
pub fn schedule_duration_ms(message: &str, timing: Timing) -> u32 {
    Emissions::new(message, timing)
        .filter_map(|e| match e {
            Emission::Pulse(p) => Some(p.duration_ms),
            Emission::Char { .. } => None,
        })
        .fold(0u32, |acc, d| acc.saturating_add(d))
}
