//! Bluetooth UART receive task
//!
//! Splits the serial stream from the Bluetooth module into text lines.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_sync::channel::TrySendError;
use embassy_time::Instant;
use embedded_io_async::Read;

use lumen_protocol::{Line, LineAssembler, LinkEvent, Status};

use crate::channels::{send_status, LINK_EVENTS};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - assembles lines and hands them to the controller
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match assembler.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line received: {}", line.as_str());
                            forward_line(line);
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Line rejected: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Stamp a line and pass it to the controller
///
/// Never waits: the UART must keep being read so that lines are stamped
/// when they arrive. A full channel means a transmission is running.
fn forward_line(line: Line) {
    let event = LinkEvent::Line {
        line,
        received_ms: Instant::now().as_millis() as u32,
    };
    if let Err(TrySendError::Full(LinkEvent::Line { line, .. })) = LINK_EVENTS.try_send(event) {
        warn!("Controller busy, dropping line: {}", line.as_str());
        send_status(Status::Busy(&line));
    }
}
