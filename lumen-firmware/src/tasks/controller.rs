//! Main controller task
//!
//! Samples the light sensor every millisecond, watches the mode button,
//! handles link events and runs transmissions. The screen is pushed to
//! the display at the end of every iteration.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};

use lumen_core::button::LongPress;
use lumen_core::config::LinkConfig;
use lumen_core::decoder::DecoderEvent;
use lumen_core::mode::{DropReason, LineOutcome, ModeController};
use lumen_core::sensor::LightThreshold;
use lumen_drivers::emitter::LedEmitter;
use lumen_drivers::transmit::Transmitter;
use lumen_protocol::{LinkEvent, Status};

use crate::channels::{send_status, LINK_EVENTS};
use crate::display::{self, Lcd, LcdProgress};

/// Sample interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 1;

/// The LED transmitter with its pulse timer
pub type LedTransmitter = Transmitter<LedEmitter<Output<'static>>, Delay>;

/// Hardware owned by the controller task
pub struct ControllerResources {
    pub config: LinkConfig,
    pub adc: Adc<'static, Async>,
    pub light: Channel<'static>,
    pub button: Input<'static>,
    pub lcd: Lcd,
    pub transmitter: LedTransmitter,
}

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(res: ControllerResources) {
    info!("Controller task started");

    let ControllerResources {
        config,
        mut adc,
        mut light,
        button,
        mut lcd,
        mut transmitter,
    } = res;

    let mut controller = ModeController::new(&config);
    let mut long_press = LongPress::new(config.ui.hold_time_ms);
    let threshold = LightThreshold::new(config.sensor.cutoff);

    display::flush(controller.screen_mut(), &mut lcd);
    info!("Mode: {}", controller.mode());

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;
        let now = now_ms();

        // Button is wired to ground with a pull-up
        if long_press.update(now, button.is_low()) {
            let mode = controller.toggle_mode(now);
            info!("Mode switched to {}", mode);
        }

        while let Ok(event) = LINK_EVENTS.try_receive() {
            match event {
                LinkEvent::Line { line, received_ms } => {
                    match controller.accept_line(&line, received_ms) {
                        LineOutcome::Transmit => {
                            transmit(&mut controller, &mut lcd, &mut transmitter, &config, &line)
                                .await;
                            // Skip the ticks missed while the LED was busy
                            ticker.reset();
                        }
                        LineOutcome::Ignored => {}
                        LineOutcome::Dropped(reason) => report_drop(reason, &line),
                    }
                }
                other => handle_connection(&mut controller, other, now_ms()),
            }
        }

        match adc.read(&mut light).await {
            Ok(raw) => {
                for event in controller.sample(now, threshold.level(raw)) {
                    log_decoder_event(event, &controller);
                }
            }
            Err(e) => {
                warn!("Light sensor read error: {:?}", e);
            }
        }

        controller.tick(now);
        display::flush(controller.screen_mut(), &mut lcd);
    }
}

/// Milliseconds since boot
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Send one line as light pulses and report back to the phone
async fn transmit(
    controller: &mut ModeController,
    lcd: &mut Lcd,
    transmitter: &mut LedTransmitter,
    config: &LinkConfig,
    line: &str,
) {
    info!("Transmitting: {}", line);
    send_status(Status::DataReceived(line));
    send_status(Status::Transmitting);

    controller.begin_transmit(now_ms());
    display::flush(controller.screen_mut(), lcd);

    let mut progress = LcdProgress {
        controller: &mut *controller,
        display: &mut *lcd,
    };
    match transmitter.transmit(line, &mut progress).await {
        Ok(sent) => {
            info!("Transmission complete: {} chars", sent);
            send_status(Status::Complete);
        }
        Err(e) => {
            error!("Transmission aborted: {:?}", e);
        }
    }

    Timer::after_millis(config.ui.summary_hold_ms as u64).await;

    // Lines stamped before this point are reported as busy by the main loop
    controller.finish_transmit(now_ms());
    display::flush(controller.screen_mut(), lcd);
}

fn handle_connection(controller: &mut ModeController, event: LinkEvent, now: u32) {
    let connected = matches!(event, LinkEvent::Connected);
    if controller.set_connected(connected, now) {
        info!("Link {}", if connected { "up" } else { "down" });
    }
}

fn report_drop(reason: DropReason, line: &str) {
    warn!("Dropped line ({}): {}", reason, line);
    let status = match reason {
        DropReason::Busy => Status::Busy(line),
        DropReason::WrongMode => Status::WrongMode(line),
    };
    send_status(status);
}

fn log_decoder_event(event: DecoderEvent, controller: &ModeController) {
    match event {
        DecoderEvent::Symbol(symbol) => trace!("Symbol {}", symbol),
        DecoderEvent::Noise { duration_ms } => trace!("Noise pulse ignored ({} ms)", duration_ms),
        DecoderEvent::Letter(ch) => debug!("Letter '{}'", ch),
        DecoderEvent::WordBreak => debug!("Word break"),
        DecoderEvent::MessageReady => {
            if let Some(message) = controller.decoder().message() {
                info!(
                    "Message received: {} ({} chars dropped)",
                    message.as_str(),
                    message.dropped()
                );
            }
        }
    }
}
