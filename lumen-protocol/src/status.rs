//! Outbound status lines

use core::fmt::{self, Write};

use heapless::String;

use crate::line::{LineError, MAX_LINE_LEN};

/// Longest encoded status line, including the echoed text and CRLF
pub const MAX_STATUS_LEN: usize = MAX_LINE_LEN + 32;

/// An encoded status line
pub type StatusLine = String<MAX_STATUS_LEN>;

/// Status reports sent back to the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status<'a> {
    /// A line was accepted for transmission
    DataReceived(&'a str),
    /// The LED transmission started
    Transmitting,
    /// The LED transmission finished
    Complete,
    /// A line arrived during a transmission and was dropped
    Busy(&'a str),
    /// A line arrived outside SEND mode and was dropped
    WrongMode(&'a str),
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::DataReceived(text) => write!(f, "Data received: {}", text),
            Status::Transmitting => f.write_str("Transmitting via LED..."),
            Status::Complete => f.write_str("Transmission complete!"),
            Status::Busy(text) => write!(f, "Busy, dropped: {}", text),
            Status::WrongMode(text) => write!(f, "Not in SEND mode, dropped: {}", text),
        }
    }
}

impl Status<'_> {
    /// Encode as a CRLF-terminated line
    pub fn encode(&self) -> Result<StatusLine, LineError> {
        let mut line = StatusLine::new();
        write!(line, "{}\r\n", self).map_err(|_| LineError::BufferTooSmall)?;
        Ok(line)
    }
}
