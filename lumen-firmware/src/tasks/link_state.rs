//! Bluetooth connection monitor
//!
//! Follows the module's STATE pin, which is high while a phone is
//! connected.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use lumen_protocol::LinkEvent;

use crate::channels::LINK_EVENTS;

/// Settle time after an edge on the STATE pin
const DEBOUNCE_MS: u64 = 20;

/// Link state task - reports connects and disconnects
#[embassy_executor::task]
pub async fn link_state_task(mut state: Input<'static>) {
    info!("Link state task started");

    let mut connected = state.is_high();
    if connected {
        info!("Bluetooth connected");
        LINK_EVENTS.send(LinkEvent::Connected).await;
    }

    loop {
        state.wait_for_any_edge().await;
        Timer::after_millis(DEBOUNCE_MS).await;

        let now = state.is_high();
        if now == connected {
            continue;
        }
        connected = now;

        if connected {
            info!("Bluetooth connected");
        } else {
            info!("Bluetooth disconnected");
        }
        LINK_EVENTS.send(LinkEvent::from_connected(connected)).await;
    }
}
