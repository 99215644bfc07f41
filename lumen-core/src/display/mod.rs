//! Screen buffer and UI screens

pub mod screen;
pub mod screens;

pub use screen::{display_char, Screen, LINE_LEN, SCREEN_COLS, SCREEN_ROWS};
