//! Light levels and timed pulses

/// Binary light level on the optical channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    #[default]
    Off,
    On,
}

impl Level {
    pub fn is_on(self) -> bool {
        self == Level::On
    }
}

impl From<bool> for Level {
    fn from(on: bool) -> Self {
        if on {
            Level::On
        } else {
            Level::Off
        }
    }
}

/// Hold the LED at `level` for `duration_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub level: Level,
    pub duration_ms: u32,
}

impl Pulse {
    pub const fn on(duration_ms: u32) -> Self {
        Self {
            level: Level::On,
            duration_ms,
        }
    }

    pub const fn off(duration_ms: u32) -> Self {
        Self {
            level: Level::Off,
            duration_ms,
        }
    }
}
