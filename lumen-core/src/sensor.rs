//! Light sensor thresholding

use crate::morse::Level;

/// Default cutoff for a 12-bit reading
pub const LIGHT_CUTOFF: u16 = 2500;

/// Maps raw sensor readings to light levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightThreshold {
    pub cutoff: u16,
}

impl Default for LightThreshold {
    fn default() -> Self {
        Self {
            cutoff: LIGHT_CUTOFF,
        }
    }
}

impl LightThreshold {
    pub fn new(cutoff: u16) -> Self {
        Self { cutoff }
    }

    /// Readings strictly above the cutoff are light
    pub fn level(&self, raw: u16) -> Level {
        Level::from(raw > self.cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_above_cutoff() {
        let t = LightThreshold::default();
        assert_eq!(t.level(0), Level::Off);
        assert_eq!(t.level(2500), Level::Off);
        assert_eq!(t.level(2501), Level::On);
        assert_eq!(t.level(4095), Level::On);
    }
}
