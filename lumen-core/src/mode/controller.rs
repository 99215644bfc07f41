//! Mode controller

use crate::config::{LinkConfig, UiConfig};
use crate::decoder::{DecoderEvent, DecoderEvents, PulseDecoder};
use crate::display::{screens, Screen};
use crate::morse::Level;
use crate::presenter::{MessagePresenter, PresenterState};
use crate::traits::TransmitProgress;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Wireless lines are sent as light
    Send,
    /// Light is decoded and displayed
    Receive,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Send => Mode::Receive,
            Mode::Receive => Mode::Send,
        }
    }

    /// Name shown on the display
    pub fn label(self) -> &'static str {
        match self {
            Mode::Send => "SEND",
            Mode::Receive => "RECEIVE",
        }
    }
}

/// Why a wireless line was not transmitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropReason {
    /// A transmission was in progress
    Busy,
    /// The device is in RECEIVE mode
    WrongMode,
}

/// Decision for a received wireless line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineOutcome {
    /// Send the line; call `begin_transmit` first
    Transmit,
    /// Blank line, nothing to do
    Ignored,
    Dropped(DropReason),
}

/// Owns the receive pipeline and the screen, and arbitrates the modes
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    connected: bool,
    busy: bool,
    busy_since_ms: u32,
    /// Start and end of the last finished transmission
    last_transmit: Option<(u32, u32)>,
    ui: UiConfig,
    decoder: PulseDecoder,
    presenter: MessagePresenter,
    screen: Screen,
    last_refresh_ms: u32,
}

impl ModeController {
    /// Create a controller in RECEIVE mode showing the idle screen
    pub fn new(config: &LinkConfig) -> Self {
        let mut screen = Screen::new();
        screens::receive_idle(&mut screen);
        Self {
            mode: Mode::Receive,
            connected: false,
            busy: false,
            busy_since_ms: 0,
            last_transmit: None,
            ui: config.ui,
            decoder: PulseDecoder::new(config.timing),
            presenter: MessagePresenter::new(config.ui.scroll_interval_ms),
            screen,
            last_refresh_ms: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether a transmission is in progress
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn decoder(&self) -> &PulseDecoder {
        &self.decoder
    }

    pub fn presenter(&self) -> &MessagePresenter {
        &self.presenter
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Switch modes, discarding all receive and transmit state
    pub fn toggle_mode(&mut self, now_ms: u32) -> Mode {
        self.mode = self.mode.toggled();
        self.decoder.reset();
        self.presenter.clear();
        self.busy = false;
        self.last_transmit = None;
        self.last_refresh_ms = now_ms;
        match self.mode {
            Mode::Send => screens::send_entered(&mut self.screen, self.connected),
            Mode::Receive => screens::receive_idle(&mut self.screen),
        }
        self.mode
    }

    /// Record a wireless link state change
    ///
    /// Returns whether the state changed. Buffers are untouched.
    pub fn set_connected(&mut self, connected: bool, now_ms: u32) -> bool {
        if self.connected == connected {
            return false;
        }
        self.connected = connected;
        self.last_refresh_ms = now_ms;
        if connected {
            screens::link_up(&mut self.screen, self.mode == Mode::Send);
        } else {
            screens::link_down(&mut self.screen);
        }
        true
    }

    /// Decide what to do with a wireless line that arrived at `received_ms`
    ///
    /// A line that arrived while a transmission was running is dropped as
    /// busy, also when it is handled after the transmission finished.
    pub fn accept_line(&self, line: &str, received_ms: u32) -> LineOutcome {
        if self.mode != Mode::Send {
            LineOutcome::Dropped(DropReason::WrongMode)
        } else if self.busy || self.arrived_during_transmit(received_ms) {
            LineOutcome::Dropped(DropReason::Busy)
        } else if line.trim().is_empty() {
            LineOutcome::Ignored
        } else {
            LineOutcome::Transmit
        }
    }

    /// Whether `received_ms` lies after the start and no later than the end
    /// of the last transmission
    fn arrived_during_transmit(&self, received_ms: u32) -> bool {
        match self.last_transmit {
            Some((start, end)) => {
                let since_start = received_ms.wrapping_sub(start);
                since_start > 0 && since_start <= end.wrapping_sub(start)
            }
            None => false,
        }
    }

    /// Mark a transmission as started
    pub fn begin_transmit(&mut self, now_ms: u32) {
        self.busy = true;
        self.busy_since_ms = now_ms;
        screens::transmitting(&mut self.screen);
    }

    /// Mark the transmission as done and return to the ready screen
    pub fn finish_transmit(&mut self, now_ms: u32) {
        self.busy = false;
        self.last_transmit = Some((self.busy_since_ms, now_ms));
        self.last_refresh_ms = now_ms;
        if self.mode == Mode::Send {
            screens::send_ready(&mut self.screen);
        }
    }

    /// Feed one light sample
    ///
    /// Samples are ignored outside RECEIVE mode.
    pub fn sample(&mut self, now_ms: u32, level: Level) -> DecoderEvents {
        if self.mode != Mode::Receive {
            return DecoderEvents::new();
        }
        let events = self.decoder.update(now_ms, level);
        for event in &events {
            match event {
                DecoderEvent::Letter(_) if self.presenter.state() == PresenterState::Empty => {
                    screens::receiving(&mut self.screen);
                }
                DecoderEvent::MessageReady => {
                    if let Some(message) = self.decoder.message() {
                        self.presenter.show(message, now_ms, &mut self.screen);
                    }
                }
                _ => {}
            }
        }
        events
    }

    /// Advance time-driven screen updates
    pub fn tick(&mut self, now_ms: u32) {
        match self.mode {
            Mode::Receive => {
                self.presenter.tick(now_ms, &mut self.screen);
            }
            Mode::Send => {
                if self.connected
                    && !self.busy
                    && now_ms.wrapping_sub(self.last_refresh_ms) >= self.ui.ready_refresh_ms
                {
                    self.last_refresh_ms = now_ms;
                    screens::send_ready(&mut self.screen);
                }
            }
        }
    }
}

impl TransmitProgress for ModeController {
    fn char_sent(&mut self, index: usize, ch: char) {
        screens::transmit_char(&mut self.screen, index, ch);
    }

    fn finished(&mut self, message: &str, _sent: usize) {
        screens::transmit_complete(&mut self.screen, message, self.ui.preview_len as usize);
    }
}
