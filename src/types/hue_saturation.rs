//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

/// Hue and saturation in the bridge's native units.
///
/// - Hue: position on the color wheel, 0-65535 (both ends are red)
/// - Saturation: 0 (white) to 254 (fully colored)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueSaturation {
    hue: u16,
    saturation: u8,
}

impl HueSaturation {
    const SAT_MAX: u8 = 254;

    /// Create a new HueSaturation from raw bridge values.
    ///
    /// Returns `None` if saturation is above 254.
    ///
    /// ```
    /// use hue_lights_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(21845, 254).is_some());
    /// assert!(HueSaturation::create(0, 255).is_none());
    /// ```
    pub fn create(hue: u16, saturation: u8) -> Option<Self> {
        if saturation <= Self::SAT_MAX {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }
}
