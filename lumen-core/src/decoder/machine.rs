//! Decoder state machine
//!
//! `update` is called once per sample with the current time and light
//! level. The inactivity timeout is evaluated before the sample's edge so
//! that a pulse arriving after a long silence starts a fresh message.

use super::events::{DecoderEvent, DecoderEvents};
use super::message::{FinalMessage, TextBuffer};
use crate::morse::{decode, GapClass, Level, MorseCode, PulseClass, Symbol, Timing, UNKNOWN};

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    /// Nothing received since the last reset
    Idle,
    /// Symbols are arriving for an unfinished message
    Receiving,
    /// A message was finalized and no new symbol has arrived since
    MessageReady,
}

/// Sampled light level to text decoder
#[derive(Debug, Clone)]
pub struct PulseDecoder {
    timing: Timing,
    state: DecoderState,
    /// Level and start time of the current run; `None` until the first sample
    run: Option<(Level, u32)>,
    last_activity_ms: u32,
    receiving: bool,
    letter: MorseCode,
    /// More symbols arrived than a letter can hold
    letter_overflow: bool,
    text: TextBuffer,
    message: Option<FinalMessage>,
}

impl PulseDecoder {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            state: DecoderState::Idle,
            run: None,
            last_activity_ms: 0,
            receiving: false,
            letter: MorseCode::EMPTY,
            letter_overflow: false,
            text: TextBuffer::new(),
            message: None,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Whether a message is being accumulated
    pub fn is_receiving(&self) -> bool {
        self.receiving
    }

    /// Symbols of the letter in progress
    pub fn letter(&self) -> MorseCode {
        self.letter
    }

    /// Text of the message in progress
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Most recently finalized message
    pub fn message(&self) -> Option<&FinalMessage> {
        self.message.as_ref()
    }

    /// Forget everything, including the finalized message and the level baseline
    pub fn reset(&mut self) {
        *self = Self::new(self.timing);
    }

    /// Process one sample
    pub fn update(&mut self, now_ms: u32, level: Level) -> DecoderEvents {
        let mut events = DecoderEvents::new();

        let Some((last_level, since_ms)) = self.run else {
            // First sample only establishes the baseline
            self.run = Some((level, now_ms));
            return events;
        };

        self.check_timeout(now_ms, &mut events);

        if level != last_level {
            let duration_ms = now_ms.wrapping_sub(since_ms);
            match last_level {
                Level::On => self.pulse_ended(now_ms, duration_ms, &mut events),
                Level::Off => self.gap_ended(duration_ms, &mut events),
            }
            self.run = Some((level, now_ms));
        }

        events
    }

    fn pulse_ended(&mut self, now_ms: u32, duration_ms: u32, events: &mut DecoderEvents) {
        match self.timing.classify_pulse(duration_ms) {
            PulseClass::Noise => {
                let _ = events.push(DecoderEvent::Noise { duration_ms });
            }
            PulseClass::Symbol(symbol) => self.push_symbol(now_ms, symbol, events),
        }
    }

    fn push_symbol(&mut self, now_ms: u32, symbol: Symbol, events: &mut DecoderEvents) {
        if self.letter.push(symbol).is_err() {
            self.letter_overflow = true;
        }
        self.receiving = true;
        self.last_activity_ms = now_ms;
        self.state = DecoderState::Receiving;
        let _ = events.push(DecoderEvent::Symbol(symbol));
    }

    fn gap_ended(&mut self, duration_ms: u32, events: &mut DecoderEvents) {
        match self.timing.classify_gap(duration_ms) {
            GapClass::IntraLetter => {}
            GapClass::Letter => self.finish_letter(events),
            GapClass::Word => {
                self.finish_letter(events);
                if self.text.push_word_break() {
                    let _ = events.push(DecoderEvent::WordBreak);
                }
            }
        }
    }

    fn finish_letter(&mut self, events: &mut DecoderEvents) {
        if self.letter.is_empty() && !self.letter_overflow {
            return;
        }
        let ch = if self.letter_overflow {
            UNKNOWN
        } else {
            decode(self.letter)
        };
        self.letter.clear();
        self.letter_overflow = false;
        self.text.push(ch);
        let _ = events.push(DecoderEvent::Letter(ch));
    }

    fn check_timeout(&mut self, now_ms: u32, events: &mut DecoderEvents) {
        if !self.receiving || now_ms.wrapping_sub(self.last_activity_ms) <= self.timing.timeout_ms {
            return;
        }
        self.finish_letter(events);
        self.message = Some(self.text.take_message());
        self.receiving = false;
        self.state = DecoderState::MessageReady;
        let _ = events.push(DecoderEvent::MessageReady);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::morse::timing::{DASH_DURATION_MS, DOT_DURATION_MS, TIMEOUT_PAUSE_MS};
    use crate::morse::{Emission, Emissions};
    use std::vec::Vec;

    /// Drives a decoder with level runs, sampling every millisecond
    struct Harness {
        decoder: PulseDecoder,
        now: u32,
        events: Vec<DecoderEvent>,
    }

    impl Harness {
        fn new() -> Self {
            let mut decoder = PulseDecoder::new(Timing::standard());
            decoder.update(0, Level::Off);
            Self {
                decoder,
                now: 0,
                events: Vec::new(),
            }
        }

        fn hold(&mut self, level: Level, duration_ms: u32) {
            for _ in 0..duration_ms {
                self.now += 1;
                let events = self.decoder.update(self.now, level);
                self.events.extend(events);
            }
        }

        fn pulse(&mut self, on_ms: u32, off_ms: u32) {
            // The level changes on the first sample of each run
            self.hold(Level::On, on_ms);
            self.hold(Level::Off, off_ms);
        }

        fn send(&mut self, message: &str) {
            for emission in Emissions::new(message, Timing::standard()) {
                if let Emission::Pulse(p) = emission {
                    self.hold(p.level, p.duration_ms);
                }
            }
        }

        fn symbols(&self) -> Vec<Symbol> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    DecoderEvent::Symbol(s) => Some(*s),
                    _ => None,
                })
                .collect()
        }
    }

    #[test]
    fn test_first_sample_is_baseline() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        assert!(decoder.update(0, Level::On).is_empty());
        assert!(decoder.update(200, Level::Off).len() == 1);
        assert_eq!(decoder.letter().len(), 1);
    }

    #[test]
    fn test_starting_dark_then_dot() {
        let mut h = Harness::new();
        h.pulse(DOT_DURATION_MS, 10);
        assert_eq!(h.symbols(), [Symbol::Dot]);
        assert_eq!(h.decoder.state(), DecoderState::Receiving);
    }

    #[test]
    fn test_dash_boundary_inclusive() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        decoder.update(0, Level::Off);
        decoder.update(1000, Level::On);
        let events = decoder.update(1300, Level::Off);
        assert_eq!(events[0], DecoderEvent::Symbol(Symbol::Dash));

        let mut decoder = PulseDecoder::new(Timing::standard());
        decoder.update(0, Level::Off);
        decoder.update(1000, Level::On);
        let events = decoder.update(1299, Level::Off);
        assert_eq!(events[0], DecoderEvent::Symbol(Symbol::Dot));
    }

    #[test]
    fn test_noise_ignored() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        decoder.update(0, Level::Off);
        decoder.update(1000, Level::On);
        let events = decoder.update(1074, Level::Off);
        assert_eq!(events.as_slice(), [DecoderEvent::Noise { duration_ms: 74 }]);
        assert!(decoder.letter().is_empty());
        assert!(!decoder.is_receiving());
        assert_eq!(decoder.state(), DecoderState::Idle);
    }

    #[test]
    fn test_letter_gap_finishes_letter() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        decoder.update(0, Level::Off);
        decoder.update(100, Level::On);
        decoder.update(250, Level::Off);
        // Gap of LETTER_PAUSE + 1
        let events = decoder.update(250 + 451, Level::On);
        assert_eq!(events.as_slice(), [DecoderEvent::Letter('E')]);
        assert_eq!(decoder.text(), "E");
    }

    #[test]
    fn test_word_gap_boundary() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        decoder.update(0, Level::Off);
        decoder.update(100, Level::On);
        decoder.update(250, Level::Off);
        // Gap of WORD_PAUSE + 1
        let events = decoder.update(250 + 1051, Level::On);
        assert_eq!(
            events.as_slice(),
            [DecoderEvent::Letter('E'), DecoderEvent::WordBreak]
        );
        assert_eq!(decoder.text(), "E ");
    }

    #[test]
    fn test_timeout_finalizes() {
        let mut h = Harness::new();
        h.pulse(DOT_DURATION_MS, DOT_DURATION_MS);
        h.hold(Level::On, DOT_DURATION_MS);
        // Last activity is the first dark sample; exactly TIMEOUT_PAUSE later
        // is not yet a timeout
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert!(h.decoder.message().is_none());
        h.hold(Level::Off, 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("I"));
        assert_eq!(h.decoder.state(), DecoderState::MessageReady);
        assert!(h.decoder.text().is_empty());
        assert!(h.events.contains(&DecoderEvent::MessageReady));
    }

    #[test]
    fn test_sos_round_trip() {
        let mut h = Harness::new();
        h.send("SOS");
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("SOS"));
    }

    #[test]
    fn test_words_round_trip() {
        let mut h = Harness::new();
        h.send("hello world");
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("HELLO WORLD"));
    }

    #[test]
    fn test_trailing_space_trimmed() {
        let mut h = Harness::new();
        h.send("HI ");
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("HI"));
    }

    #[test]
    fn test_long_letter_decodes_unknown() {
        let mut h = Harness::new();
        for _ in 0..7 {
            h.pulse(DASH_DURATION_MS, DOT_DURATION_MS);
        }
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("?"));
    }

    #[test]
    fn test_new_message_after_timeout() {
        let mut h = Harness::new();
        h.send("E");
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        h.send("T");
        assert_eq!(h.decoder.state(), DecoderState::Receiving);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("E"));
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        assert_eq!(h.decoder.message().map(|m| m.as_str()), Some("T"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut h = Harness::new();
        h.send("E");
        h.hold(Level::Off, TIMEOUT_PAUSE_MS + 1);
        h.send("T");
        h.decoder.reset();
        assert_eq!(h.decoder.state(), DecoderState::Idle);
        assert!(h.decoder.message().is_none());
        assert!(h.decoder.text().is_empty());
        assert!(h.decoder.letter().is_empty());
        assert!(!h.decoder.is_receiving());
    }

    #[test]
    fn test_clock_wraparound() {
        let mut decoder = PulseDecoder::new(Timing::standard());
        let start = u32::MAX - 100;
        decoder.update(start, Level::Off);
        decoder.update(start.wrapping_add(10), Level::On);
        let events = decoder.update(start.wrapping_add(160), Level::Off);
        assert_eq!(events.as_slice(), [DecoderEvent::Symbol(Symbol::Dot)]);
    }
}
