//! Morse symbols and packed symbol sequences

use core::fmt;

/// Longest symbol sequence carried by the table
pub const MAX_SYMBOLS: usize = 6;

/// Number of distinct packed sequences of up to `MAX_SYMBOLS` symbols
pub(crate) const CODE_SLOTS: usize = 1 << (MAX_SYMBOLS + 1);

/// A single Morse element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Short pulse
    Dot,
    /// Long pulse
    Dash,
}

impl Symbol {
    /// Textual form used in table entries
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }

    /// Parse the textual form
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Symbol::Dot),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Sequence is already `MAX_SYMBOLS` long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodeOverflow;

/// Up to `MAX_SYMBOLS` symbols packed into a length and a bit pattern
///
/// Bit `i` of the pattern is set when symbol `i` is a dash. Combined with
/// the length, the pair gives every sequence a unique slot index, which
/// is what makes reverse lookup constant-time.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct MorseCode {
    len: u8,
    bits: u8,
}

impl MorseCode {
    /// The empty sequence
    pub const EMPTY: Self = Self { len: 0, bits: 0 };

    /// Parse a dot/dash pattern such as `".-"`
    ///
    /// Returns `None` for patterns longer than `MAX_SYMBOLS` or containing
    /// anything other than `.` and `-`.
    pub const fn parse(pattern: &str) -> Option<Self> {
        let bytes = pattern.as_bytes();
        if bytes.len() > MAX_SYMBOLS {
            return None;
        }
        let mut bits = 0u8;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'.' => {}
                b'-' => bits |= 1 << i,
                _ => return None,
            }
            i += 1;
        }
        Some(Self {
            len: bytes.len() as u8,
            bits,
        })
    }

    /// Number of symbols in the sequence
    pub const fn len(self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    pub const fn is_full(self) -> bool {
        self.len as usize >= MAX_SYMBOLS
    }

    /// Append a symbol
    pub fn push(&mut self, symbol: Symbol) -> Result<(), CodeOverflow> {
        if self.is_full() {
            return Err(CodeOverflow);
        }
        if symbol == Symbol::Dash {
            self.bits |= 1 << self.len;
        }
        self.len += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Symbol at `index`, if present
    pub fn get(self, index: usize) -> Option<Symbol> {
        if index >= self.len() {
            return None;
        }
        if self.bits & (1 << index) != 0 {
            Some(Symbol::Dash)
        } else {
            Some(Symbol::Dot)
        }
    }

    /// Iterate the symbols in transmission order
    pub fn symbols(self) -> Symbols {
        Symbols {
            code: self,
            index: 0,
        }
    }

    /// Unique slot for this sequence in `0..CODE_SLOTS`
    pub(crate) const fn slot(self) -> usize {
        (1usize << self.len) | self.bits as usize
    }
}

impl fmt::Debug for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MorseCode(\"{}\")", self)
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            fmt::Write::write_char(f, symbol.as_char())?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MorseCode {
    fn format(&self, f: defmt::Formatter) {
        for symbol in self.symbols() {
            defmt::write!(f, "{}", symbol.as_char());
        }
    }
}

/// Iterator over the symbols of a `MorseCode`
#[derive(Debug, Clone)]
pub struct Symbols {
    code: MorseCode,
    index: usize,
}

impl Iterator for Symbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        let symbol = self.code.get(self.index)?;
        self.index += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols {}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn test_parse_and_display() {
        let code = MorseCode::parse("-.-.").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "-.-.");
    }

    #[test]
    fn test_parse_rejects_bad_patterns() {
        assert!(MorseCode::parse("..x").is_none());
        assert!(MorseCode::parse(".......").is_none());
        assert_eq!(MorseCode::parse(""), Some(MorseCode::EMPTY));
    }

    #[test]
    fn test_push_until_full() {
        let mut code = MorseCode::EMPTY;
        for _ in 0..MAX_SYMBOLS {
            code.push(Symbol::Dash).unwrap();
        }
        assert!(code.is_full());
        assert_eq!(code.push(Symbol::Dot), Err(CodeOverflow));
        assert_eq!(code.len(), MAX_SYMBOLS);
    }

    #[test]
    fn test_symbols_in_order() {
        let code = MorseCode::parse(".--").unwrap();
        let symbols: Vec<Symbol> = code.symbols().collect();
        assert_eq!(symbols, [Symbol::Dot, Symbol::Dash, Symbol::Dash]);
    }

    #[test]
    fn test_slots_distinguish_leading_dots() {
        // Same bit pattern, different length
        let e = MorseCode::parse(".").unwrap();
        let i = MorseCode::parse("..").unwrap();
        assert_ne!(e.slot(), i.slot());
        assert!(MorseCode::parse("------").unwrap().slot() < CODE_SLOTS);
    }
}
