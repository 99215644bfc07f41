//! Operating mode control
//!
//! Routes samples to the decoder in RECEIVE mode and wireless lines to the
//! transmitter in SEND mode, and keeps the screen in sync with both.

mod controller;

pub use controller::{DropReason, LineOutcome, Mode, ModeController};
