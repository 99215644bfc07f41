//! Inter-task communication channels
//!
//! Defines the static channels used between the Bluetooth link tasks and
//! the controller.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use lumen_protocol::{LinkEvent, Status, StatusLine};

/// Channel capacity for link events
const LINK_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outgoing status lines
const STATUS_CHANNEL_SIZE: usize = 4;

/// Lines and connection changes from the Bluetooth module
///
/// The controller drains this every sample tick. It only fills up while a
/// transmission holds the controller.
pub static LINK_EVENTS: Channel<CriticalSectionRawMutex, LinkEvent, LINK_CHANNEL_SIZE> =
    Channel::new();

/// Status replies for the phone
pub static STATUS_OUT: Channel<CriticalSectionRawMutex, StatusLine, STATUS_CHANNEL_SIZE> =
    Channel::new();

/// Queue a status reply, dropping it if the UART is backed up
pub fn send_status(status: Status<'_>) {
    match status.encode() {
        Ok(line) => {
            if STATUS_OUT.try_send(line).is_err() {
                warn!("Status channel full, dropping reply");
            }
        }
        Err(e) => {
            warn!("Status reply too long: {:?}", e);
        }
    }
}
