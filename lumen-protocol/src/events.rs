//! Wireless link events

use crate::line::Line;

/// Events produced by the wireless link tasks
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// A phone connected
    Connected,
    /// The phone disconnected
    Disconnected,
    /// A complete inbound line and when it was assembled, in ms since boot
    Line { line: Line, received_ms: u32 },
}

impl LinkEvent {
    /// Event for a connection-state pin level
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            LinkEvent::Connected
        } else {
            LinkEvent::Disconnected
        }
    }
}
