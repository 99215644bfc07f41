//! Configuration type definitions

use heapless::String;

use crate::button::HOLD_TIME_MS;
use crate::display::LINE_LEN;
use crate::morse::{Timing, TimingError};
use crate::presenter::SCROLL_INTERVAL_MS;
use crate::sensor::LIGHT_CUTOFF;

/// Maximum wireless device name length
pub const MAX_NAME_LEN: usize = 16;

/// Light sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Raw 12-bit readings above this are light
    pub cutoff: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            cutoff: LIGHT_CUTOFF,
        }
    }
}

/// LED emitter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    /// Pin is driven low to light the LED
    pub active_low: bool,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

/// UI behavior configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    /// Time between ticker steps
    pub scroll_interval_ms: u32,
    /// Button hold time to toggle mode
    pub hold_time_ms: u32,
    /// Characters of a sent message shown in the summary
    pub preview_len: u8,
    /// How long the transmit summary stays up
    pub summary_hold_ms: u32,
    /// Refresh period of the send-ready screen
    pub ready_refresh_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_interval_ms: SCROLL_INTERVAL_MS,
            hold_time_ms: HOLD_TIME_MS,
            preview_len: 10,
            summary_hold_ms: 2000,
            ready_refresh_ms: 5000,
        }
    }
}

/// Wireless module configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BluetoothConfig {
    /// Advertised device name, shown on the pairing screen
    pub name: String<MAX_NAME_LEN>,
}

impl Default for BluetoothConfig {
    fn default() -> Self {
        let mut name = String::new();
        let _ = name.push_str("LiFi-Transceiver");
        Self { name }
    }
}

/// Complete link configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    pub timing: Timing,
    pub sensor: SensorConfig,
    pub led: LedConfig,
    pub ui: UiConfig,
    pub bluetooth: BluetoothConfig,
}

/// Invalid configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Timing values are inconsistent
    Timing(TimingError),
    /// Ticker interval is zero
    ScrollInterval,
    /// Hold time is zero
    HoldTime,
    /// Preview does not fit next to the summary label
    PreviewLen,
    /// Sensor cutoff outside the 12-bit range
    SensorCutoff,
    /// Device name is empty
    DeviceName,
}

impl From<TimingError> for ConfigError {
    fn from(e: TimingError) -> Self {
        ConfigError::Timing(e)
    }
}

/// Length of the `"Sent: "` label on the summary screen
const SUMMARY_LABEL_LEN: usize = 6;

impl LinkConfig {
    /// Check value ranges and timing consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        if self.ui.scroll_interval_ms == 0 {
            return Err(ConfigError::ScrollInterval);
        }
        if self.ui.hold_time_ms == 0 {
            return Err(ConfigError::HoldTime);
        }
        if self.ui.preview_len as usize > LINE_LEN - SUMMARY_LABEL_LEN {
            return Err(ConfigError::PreviewLen);
        }
        if self.sensor.cutoff > 4095 {
            return Err(ConfigError::SensorCutoff);
        }
        if self.bluetooth.name.is_empty() {
            return Err(ConfigError::DeviceName);
        }
        Ok(())
    }
}
