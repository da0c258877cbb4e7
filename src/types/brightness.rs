//! Brightness control for Hue lights.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 100 percent.
///
/// The bridge works in raw `bri` units (1-254); [`Brightness::bri`] does the
/// conversion.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 100;
    const BRI_MIN: u8 = 1;
    const BRI_MAX: u8 = 254;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is above 100.
    ///
    /// ```
    /// use hue_lights_rs::Brightness;
    ///
    /// assert!(Brightness::create(0).is_some());
    /// assert!(Brightness::create(100).is_some());
    /// assert!(Brightness::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Converts a raw bridge `bri` value back to a percentage.
    pub fn from_bri(bri: u8) -> Self {
        let bri = bri.clamp(Self::BRI_MIN, Self::BRI_MAX);
        let value = (u16::from(bri) * 100 + u16::from(Self::BRI_MAX) / 2) / u16::from(Self::BRI_MAX);
        Brightness { value: value as u8 }
    }

    /// The raw bridge `bri` value (1-254).
    ///
    /// ```
    /// use hue_lights_rs::Brightness;
    ///
    /// assert_eq!(Brightness::new().bri(), 254);
    /// assert_eq!(Brightness::create(0).unwrap().bri(), 1);
    /// assert_eq!(Brightness::create(50).unwrap().bri(), 127);
    /// ```
    pub fn bri(&self) -> u8 {
        let scaled = (u16::from(self.value) * u16::from(Self::BRI_MAX) + 50) / 100;
        (scaled as u8).max(Self::BRI_MIN)
    }

    fn is_valid(value: u8) -> bool {
        value <= Self::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bri_round_trip_at_bounds() {
        assert_eq!(Brightness::from_bri(254).value(), 100);
        assert_eq!(Brightness::from_bri(0).value(), 0);
        assert_eq!(Brightness::from_bri(127).value(), 50);
    }
}
