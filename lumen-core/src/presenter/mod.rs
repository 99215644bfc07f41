//! Received message presentation
//!
//! Messages that fit a row are shown statically. Longer ones scroll as a
//! ticker over the message looped with a three-space separator.

mod ticker;
mod view;

pub use ticker::{window_at, Ticker, Window, SCROLL_SEPARATOR};
pub use view::{MessagePresenter, PresenterState, SCROLL_INTERVAL_MS};
