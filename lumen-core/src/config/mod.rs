//! Configuration types
//!
//! Board-agnostic link configuration. The firmware fills these from an
//! embedded TOML file.

pub mod types;

pub use types::*;
