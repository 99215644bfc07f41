//! Wireless Line Protocol
//!
//! This crate defines the text protocol spoken over the serial Bluetooth
//! link between the transceiver and a phone terminal app.
//!
//! # Protocol Overview
//!
//! Inbound, the phone sends newline-terminated text lines:
//! ```text
//! HELLO WORLD\r\n
//! ```
//! Carriage returns are ignored, surrounding whitespace is trimmed and
//! blank lines are skipped. Lines longer than `MAX_LINE_LEN` bytes are
//! discarded whole.
//!
//! Outbound, the transceiver answers with CRLF-terminated status lines
//! such as `Data received: HELLO WORLD`.

#![no_std]
#![deny(unsafe_code)]

pub mod events;
pub mod line;
pub mod status;

pub use events::LinkEvent;
pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use status::{Status, StatusLine, MAX_STATUS_LEN};
