//! Bluetooth UART transmit task
//!
//! Writes status replies back to the phone.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::STATUS_OUT;

/// Link TX task - drains the status channel onto the UART
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    loop {
        let line = STATUS_OUT.receive().await;
        trace!("TX: {}", line.as_str());

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("UART write error: {:?}", e);
        }
    }
}
