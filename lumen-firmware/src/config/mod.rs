//! Configuration loading and parsing
//!
//! The link configuration is compiled in from `link.toml` and parsed by a
//! custom no_std parser.

pub mod loader;
pub mod toml;

pub use loader::load_or_default;
