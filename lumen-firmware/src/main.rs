//! Lumen - Optical Morse Link Firmware
//!
//! Firmware for RP2040-based Li-Fi transceivers. Text arriving from a
//! phone over a serial Bluetooth module is flashed out on an LED as Morse
//! code. In the other mode a light sensor picks up another transceiver's
//! pulses and the decoded message is shown on a 16x2 character display.
//!
//! A long press on the mode button switches between SEND and RECEIVE.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_core::display::{screens, Screen};
use lumen_drivers::display::Hd44780;
use lumen_drivers::emitter::LedEmitter;
use lumen_drivers::transmit::Transmitter;

mod channels;
mod config;
mod display;
mod tasks;

/// Embedded link configuration (compiled into firmware)
/// Edit link.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../link.toml");

/// Baud rate of the Bluetooth module's serial port
const LINK_BAUD: u32 = 9600;

/// How long the pairing screen stays up at boot
const PAIRING_SCREEN_MS: u64 = 2000;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_or_default(EMBEDDED_CONFIG);

    // Character display in 4-bit mode: RS, E, D4-D7
    let mut lcd = Hd44780::new(
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        [
            Output::new(p.PIN_18, Level::Low),
            Output::new(p.PIN_19, Level::Low),
            Output::new(p.PIN_20, Level::Low),
            Output::new(p.PIN_21, Level::Low),
        ],
        Delay,
    );
    if let Err(e) = lcd.init() {
        error!("Display init failed: {:?}", e);
    }

    let mut screen = Screen::new();
    screens::boot(&mut screen);
    display::flush(&mut screen, &mut lcd);

    // Transmitter LED, starting dark whatever its polarity
    let idle = if config.led.active_low {
        Level::High
    } else {
        Level::Low
    };
    let led = LedEmitter::new(Output::new(p.PIN_2, idle), config.led.active_low).unwrap();
    let transmitter = Transmitter::new(led, Delay, config.timing);
    info!("LED emitter ready (active_low: {})", config.led.active_low);

    // Light sensor on ADC0
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let light = Channel::new_pin(p.PIN_26, Pull::None);

    // Mode button to ground
    let button = Input::new(p.PIN_15, Pull::Up);

    // Bluetooth module: UART0 plus its STATE output
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = LINK_BAUD;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let link_state = Input::new(p.PIN_22, Pull::Down);

    screens::pairing(&mut screen, &config.bluetooth.name);
    display::flush(&mut screen, &mut lcd);
    Timer::after_millis(PAIRING_SCREEN_MS).await;

    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(tx)).unwrap();
    spawner.spawn(tasks::link_state_task(link_state)).unwrap();
    spawner
        .spawn(tasks::controller_task(tasks::ControllerResources {
            config,
            adc,
            light,
            button,
            lcd,
            transmitter,
        }))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
