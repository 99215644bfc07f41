//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod display;
pub mod emitter;

pub use display::{CharDisplay, DisplayError};
pub use emitter::{Emitter, EmitterError, TransmitProgress};
