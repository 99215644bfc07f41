//! Inbound line assembly

use heapless::{String, Vec};

/// Maximum accepted line length in bytes, before trimming
pub const MAX_LINE_LEN: usize = 128;

/// A trimmed, non-empty inbound line
pub type Line = String<MAX_LINE_LEN>;

/// Line assembly errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; the rest of it is skipped
    Overflow,
    /// Line is not valid UTF-8
    InvalidUtf8,
    /// Output buffer too small
    BufferTooSmall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblyState {
    /// Collecting bytes of the current line
    Collecting,
    /// Skipping the remainder of an overlong line
    Discarding,
}

/// State machine splitting a byte stream into lines
#[derive(Debug, Clone)]
pub struct LineAssembler {
    state: AssemblyState,
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    pub fn new() -> Self {
        Self {
            state: AssemblyState::Collecting,
            buffer: Vec::new(),
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.state = AssemblyState::Collecting;
        self.buffer.clear();
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` at the end of a non-blank line, `Ok(None)`
    /// when more bytes are needed, or `Err` when a line is rejected.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match (self.state, byte) {
            (AssemblyState::Discarding, b'\n') => {
                self.reset();
                Ok(None)
            }
            (AssemblyState::Discarding, _) => Ok(None),
            (AssemblyState::Collecting, b'\r') => Ok(None),
            (AssemblyState::Collecting, b'\n') => {
                let line = Self::finish(&self.buffer);
                self.buffer.clear();
                line
            }
            (AssemblyState::Collecting, _) => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.state = AssemblyState::Discarding;
                    return Err(LineError::Overflow);
                }
                Ok(None)
            }
        }
    }

    /// Feed multiple bytes
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn finish(bytes: &[u8]) -> Result<Option<Line>, LineError> {
        let text = core::str::from_utf8(bytes).map_err(|_| LineError::InvalidUtf8)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let mut line = Line::new();
        // Cannot fail: the trimmed text is no longer than the buffer
        let _ = line.push_str(text);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::vec::Vec as StdVec;

    fn lines(input: &[u8]) -> StdVec<Result<Line, LineError>> {
        let mut assembler = LineAssembler::new();
        input
            .iter()
            .filter_map(|&b| assembler.feed(b).transpose())
            .collect()
    }

    #[test]
    fn test_splits_and_trims() {
        let out = lines(b"  hello \r\nworld\n");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_ref().unwrap().as_str(), "hello");
        assert_eq!(out[1].as_ref().unwrap().as_str(), "world");
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert!(lines(b"\n\r\n   \n").is_empty());
    }

    #[test]
    fn test_no_newline_no_line() {
        assert!(lines(b"pending").is_empty());
    }

    #[test]
    fn test_overflow_discards_whole_line() {
        let mut input = StdVec::new();
        input.extend(core::iter::repeat(b'x').take(MAX_LINE_LEN + 10));
        input.extend_from_slice(b"\nnext\n");
        let out = lines(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], Err(LineError::Overflow));
        assert_eq!(out[1].as_ref().unwrap().as_str(), "next");
    }

    #[test]
    fn test_exactly_max_len_accepted() {
        let mut input = StdVec::new();
        input.extend(core::iter::repeat(b'y').take(MAX_LINE_LEN));
        input.push(b'\n');
        let out = lines(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_ref().unwrap().len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let out = lines(b"\xff\xfe\nok\n");
        assert_eq!(out[0], Err(LineError::InvalidUtf8));
        assert_eq!(out[1].as_ref().unwrap().as_str(), "ok");
    }

    #[test]
    fn test_feed_bytes_stops_at_line() {
        let mut assembler = LineAssembler::new();
        let line = assembler.feed_bytes(b"one\ntwo\n").unwrap();
        assert_eq!(line.unwrap().as_str(), "one");
    }

    #[test]
    fn test_utf8_split_across_feeds() {
        let mut assembler = LineAssembler::new();
        let bytes = "é\n".as_bytes();
        assert_eq!(assembler.feed(bytes[0]), Ok(None));
        assert_eq!(assembler.feed(bytes[1]), Ok(None));
        assert_eq!(assembler.feed(bytes[2]).unwrap().unwrap().as_str(), "é");
    }
}
