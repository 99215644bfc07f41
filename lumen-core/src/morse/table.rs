//! Character to Morse mapping
//!
//! Both directions are flat arrays indexed by ASCII code and by packed
//! sequence slot. The table is built by a `const fn` that rejects
//! duplicate characters and duplicate sequences, so the static `TABLE`
//! fails to compile if an entry collides.

use super::symbol::{MorseCode, CODE_SLOTS};

/// Character that encodes as a word gap instead of symbols
pub const WORD_SEPARATOR: char = ' ';

/// Character produced for sequences absent from the table
pub const UNKNOWN: char = '?';

const ASCII_SLOTS: usize = 128;

/// Supported characters and their sequences
///
/// Letters are stored uppercase; lookups fold lowercase input.
pub const ENTRIES: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('"', ".-..-."),
    ('_', "..--.-"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('-', "-....-"),
    ('+', ".-.-."),
    ('=', "-...-"),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('@', ".--.-."),
    ('~', "...-.-"),
    ('*', ".--.."),
];

/// Result of looking up a character for transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Encoding {
    /// Symbols to send; empty for characters outside the table
    Code(MorseCode),
    /// The word separator
    WordSeparator,
}

/// Table construction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Pattern is empty, too long, or has characters other than `.`/`-`
    InvalidPattern { index: usize },
    /// Character is not ASCII or is the word separator
    InvalidChar { index: usize },
    /// Character appears twice
    DuplicateChar { index: usize },
    /// Sequence appears twice
    DuplicateCode { index: usize },
}

/// Bidirectional Morse lookup table
pub struct MorseTable {
    by_char: [MorseCode; ASCII_SLOTS],
    /// ASCII code per sequence slot, 0 when unassigned
    by_code: [u8; CODE_SLOTS],
}

impl MorseTable {
    /// Build a table, reporting the first invalid entry
    pub const fn try_from_entries(entries: &[(char, &str)]) -> Result<Self, TableError> {
        let mut by_char = [MorseCode::EMPTY; ASCII_SLOTS];
        let mut by_code = [0u8; CODE_SLOTS];
        let mut index = 0;
        while index < entries.len() {
            let (ch, pattern) = entries[index];
            if !ch.is_ascii() || ch == WORD_SEPARATOR || ch == '\0' {
                return Err(TableError::InvalidChar { index });
            }
            let code = match MorseCode::parse(pattern) {
                Some(code) if !code.is_empty() => code,
                _ => return Err(TableError::InvalidPattern { index }),
            };
            let ascii = ch.to_ascii_uppercase() as usize;
            if !by_char[ascii].is_empty() {
                return Err(TableError::DuplicateChar { index });
            }
            if by_code[code.slot()] != 0 {
                return Err(TableError::DuplicateCode { index });
            }
            by_char[ascii] = code;
            by_code[code.slot()] = ascii as u8;
            index += 1;
        }
        Ok(Self { by_char, by_code })
    }

    /// Build a table, panicking on an invalid entry
    ///
    /// In a `static` initializer the panic becomes a compile error.
    pub const fn from_entries(entries: &[(char, &str)]) -> Self {
        match Self::try_from_entries(entries) {
            Ok(table) => table,
            Err(TableError::InvalidPattern { .. }) => panic!("invalid Morse pattern in table"),
            Err(TableError::InvalidChar { .. }) => panic!("invalid character in Morse table"),
            Err(TableError::DuplicateChar { .. }) => panic!("duplicate character in Morse table"),
            Err(TableError::DuplicateCode { .. }) => panic!("duplicate sequence in Morse table"),
        }
    }

    /// Look up a character for transmission
    ///
    /// Letters are case-insensitive. Characters outside the table encode
    /// as an empty sequence.
    pub fn encode(&self, ch: char) -> Encoding {
        if ch == WORD_SEPARATOR {
            return Encoding::WordSeparator;
        }
        if !ch.is_ascii() {
            return Encoding::Code(MorseCode::EMPTY);
        }
        Encoding::Code(self.by_char[ch.to_ascii_uppercase() as usize])
    }

    /// Look up a received sequence, yielding `UNKNOWN` when unassigned
    pub fn decode(&self, code: MorseCode) -> char {
        match self.by_code[code.slot()] {
            0 => UNKNOWN,
            ascii => ascii as char,
        }
    }

    /// Whether `ch` has a sequence in the table
    pub fn contains(&self, ch: char) -> bool {
        matches!(self.encode(ch), Encoding::Code(code) if !code.is_empty())
    }
}

/// The link's Morse table
pub static TABLE: MorseTable = MorseTable::from_entries(ENTRIES);

/// Encode with the link's table
pub fn encode(ch: char) -> Encoding {
    TABLE.encode(ch)
}

/// Decode with the link's table
pub fn decode(code: MorseCode) -> char {
    TABLE.decode(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morse::symbol::MAX_SYMBOLS;

    fn code(pattern: &str) -> MorseCode {
        MorseCode::parse(pattern).unwrap()
    }

    #[test]
    fn test_encode_letters_case_insensitive() {
        assert_eq!(encode('A'), Encoding::Code(code(".-")));
        assert_eq!(encode('a'), Encoding::Code(code(".-")));
        assert_eq!(encode('s'), Encoding::Code(code("...")));
    }

    #[test]
    fn test_encode_space_and_unmapped() {
        assert_eq!(encode(' '), Encoding::WordSeparator);
        assert_eq!(encode('#'), Encoding::Code(MorseCode::EMPTY));
        assert_eq!(encode('é'), Encoding::Code(MorseCode::EMPTY));
        assert!(!TABLE.contains('$'));
    }

    #[test]
    fn test_decode_known_and_unknown() {
        assert_eq!(decode(code("...")), 'S');
        assert_eq!(decode(code("-.--.-")), ')');
        assert_eq!(decode(code("......")), UNKNOWN);
        assert_eq!(decode(MorseCode::EMPTY), UNKNOWN);
    }

    #[test]
    fn test_every_entry_round_trips() {
        for &(ch, pattern) in ENTRIES {
            let Encoding::Code(c) = encode(ch) else {
                panic!("{ch} encoded as separator");
            };
            assert_eq!(c, code(pattern));
            assert!(c.len() <= MAX_SYMBOLS);
            assert_eq!(decode(c), ch);
        }
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let result = MorseTable::try_from_entries(&[('A', ".-"), ('B', ".-")]);
        assert!(matches!(result, Err(TableError::DuplicateCode { index: 1 })));
    }

    #[test]
    fn test_duplicate_char_rejected() {
        let result = MorseTable::try_from_entries(&[('A', ".-"), ('a', "-")]);
        assert!(matches!(result, Err(TableError::DuplicateChar { index: 1 })));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        assert!(matches!(
            MorseTable::try_from_entries(&[('A', "")]),
            Err(TableError::InvalidPattern { index: 0 })
        ));
        assert!(matches!(
            MorseTable::try_from_entries(&[('A', "..-..-.")]),
            Err(TableError::InvalidPattern { index: 0 })
        ));
        assert!(matches!(
            MorseTable::try_from_entries(&[(' ', ".")]),
            Err(TableError::InvalidChar { index: 0 })
        ));
    }
}
