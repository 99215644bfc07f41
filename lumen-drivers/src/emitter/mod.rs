//! Light emitters

pub mod led;

pub use led::LedEmitter;
